// SPDX-License-Identifier: MIT

//! External collaborator clients.

pub mod auth;
pub mod classify;

pub use auth::{AuthService, LoginResponse, SignupInput};
pub use classify::{fallback_tags, ClassifyService};
