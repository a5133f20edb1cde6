// SPDX-License-Identifier: MIT

//! CRUD laws shared by the list-backed domain stores.

mod common;

use wod_tracker::models::{
    NewClass, NewNotification, NewSavedWod, NewWodEntry, NotificationTarget, Profile, Role,
    UserAccount, WodEntryPatch, WodTime,
};
use wod_tracker::stores::{
    ClassStore, NotificationStore, ProfileStore, SavedWodStore, UserStore, WodLogStore,
    DELETED_WOD_PLACEHOLDER,
};

fn entry(date: &str, text: &str) -> NewWodEntry {
    NewWodEntry {
        date: date.to_string(),
        text: text.to_string(),
        time: WodTime {
            min: "12".to_string(),
            sec: "30".to_string(),
        },
        exercises: vec![],
        tags: None,
    }
}

#[test]
fn test_add_assigns_fresh_unique_ids() {
    let store = WodLogStore::new(common::test_storage());

    let first = store.add(entry("2024-01-10", "Fran"));
    let second = store.add(entry("2024-01-11", "Murph"));

    assert_ne!(first, second);
    assert_eq!(store.get_all().len(), 2);
    assert_eq!(store.get_by_id(&first).unwrap().text, "Fran");
    assert_eq!(store.get_by_id(&second).unwrap().text, "Murph");
}

#[test]
fn test_log_entries_are_newest_first() {
    let store = WodLogStore::new(common::test_storage());

    store.add(entry("2024-01-10", "first"));
    store.add(entry("2024-01-11", "second"));

    let all = store.get_all();
    assert_eq!(all[0].text, "second");
    assert_eq!(all[1].text, "first");
}

#[test]
fn test_update_merges_only_patch_fields() {
    let store = WodLogStore::new(common::test_storage());
    let id = store.add(entry("2024-01-10", "Fran"));

    store.update(
        &id,
        &WodEntryPatch {
            text: Some("Fran Rx".to_string()),
            ..Default::default()
        },
    );

    let updated = store.get_by_id(&id).unwrap();
    assert_eq!(updated.text, "Fran Rx");
    assert_eq!(updated.date, "2024-01-10"); // untouched
    assert_eq!(updated.time.min, "12");
}

#[test]
fn test_empty_patch_is_identity() {
    let store = WodLogStore::new(common::test_storage());
    let id = store.add(entry("2024-01-10", "Fran"));
    let before = store.get_by_id(&id).unwrap();

    store.update(&id, &WodEntryPatch::default());

    assert_eq!(store.get_by_id(&id).unwrap(), before);
}

#[test]
fn test_remove_deletes_exactly_one() {
    let store = WodLogStore::new(common::test_storage());
    let id = store.add(entry("2024-01-10", "Fran"));
    store.add(entry("2024-01-11", "Murph"));

    store.remove(&id);

    assert_eq!(store.get_all().len(), 1);
    assert!(store.get_by_id(&id).is_none());
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let store = WodLogStore::new(common::test_storage());
    store.add(entry("2024-01-10", "Fran"));

    store.remove("no-such-id");

    assert_eq!(store.get_all().len(), 1);
}

#[test]
fn test_fresh_store_instance_reads_back_equal_state() {
    let storage = common::test_storage();
    let store = WodLogStore::new(storage.clone());
    store.add(NewWodEntry {
        date: "2024-01-10".to_string(),
        text: "Fran".to_string(),
        time: WodTime {
            min: "4".to_string(),
            sec: "20".to_string(),
        },
        exercises: vec![],
        tags: Some(vec!["Interval".to_string(), "Machine".to_string()]),
    });

    let rehydrated = WodLogStore::new(storage);
    assert_eq!(rehydrated.get_all(), store.get_all());
}

#[test]
fn test_reload_is_idempotent() {
    let store = WodLogStore::new(common::test_storage());
    store.add(entry("2024-01-10", "Fran"));

    store.reload();
    let first = store.get_all();
    store.reload();

    assert_eq!(store.get_all(), first);
}

#[test]
fn test_classes_append_in_insertion_order() {
    let store = ClassStore::new(common::test_storage());

    let first = store
        .add(NewClass {
            date: "2024-01-10".to_string(),
            time: "06:00".to_string(),
            location: "Main floor".to_string(),
            wod_id: "w1".to_string(),
            capacity: 12,
        })
        .unwrap();
    let second = store
        .add(NewClass {
            date: "2024-01-10".to_string(),
            time: "07:00".to_string(),
            location: "Main floor".to_string(),
            wod_id: "w1".to_string(),
            capacity: 12,
        })
        .unwrap();

    let all = store.get_all();
    assert_eq!(all[0].id, first);
    assert_eq!(all[1].id, second);
}

#[test]
fn test_invalid_class_writes_nothing() {
    let store = ClassStore::new(common::test_storage());

    let result = store.add(NewClass {
        date: "2024-01-10".to_string(),
        time: "06:00".to_string(),
        location: "Main floor".to_string(),
        wod_id: "w1".to_string(),
        capacity: 0,
    });

    assert!(result.is_err());
    assert!(store.get_all().is_empty());
}

#[test]
fn test_saved_wod_title_lookup_tolerates_dangling_id() {
    let store = SavedWodStore::new(common::test_storage());
    let id = store.add(NewSavedWod {
        date: "2024-01-10".to_string(),
        title: "Cindy".to_string(),
        description: "AMRAP 20".to_string(),
    });

    assert_eq!(store.title_for(&id), "Cindy");
    store.remove(&id);
    assert_eq!(store.title_for(&id), DELETED_WOD_PLACEHOLDER);
}

#[test]
fn test_user_directory_rejects_duplicate_email() {
    let store = UserStore::new(common::test_storage());
    store
        .add(UserAccount {
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
            nickname: "Al".to_string(),
            role: Role::Member,
        })
        .unwrap();

    let duplicate = store.add(UserAccount {
        email: "A@B.com ".to_string(),
        password: "other66".to_string(),
        nickname: "Alfred".to_string(),
        role: Role::Member,
    });

    assert!(duplicate.is_err());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_notification_feed_caps_at_twenty() {
    let store = NotificationStore::new(common::test_storage());

    for i in 0..25 {
        store.add(NewNotification {
            message: format!("class {i}"),
            link: None,
            target: NotificationTarget::Member,
        });
    }

    let all = store.get_all();
    assert_eq!(all.len(), 20);
    assert_eq!(all[0].message, "class 24"); // newest first
}

#[test]
fn test_notification_read_state_is_per_user() {
    let store = NotificationStore::new(common::test_storage());
    store.add(NewNotification {
        message: "New class published".to_string(),
        link: Some("/classes".to_string()),
        target: NotificationTarget::Member,
    });

    assert!(store.has_unread_for(NotificationTarget::Member, "a@b.com"));
    store.mark_all_read_for(NotificationTarget::Member, "a@b.com");

    assert!(!store.has_unread_for(NotificationTarget::Member, "a@b.com"));
    assert!(store.has_unread_for(NotificationTarget::Member, "c@d.com"));
    assert!(!store.has_unread_for(NotificationTarget::Coach, "a@b.com"));
}

#[test]
fn test_profile_roundtrip_and_scan() {
    let storage = common::test_storage();
    let store = ProfileStore::new(storage.clone());
    let mut profile = Profile::default_for("Al");
    profile.box_name = "CF Mapo".to_string();

    store.set("a@b.com", profile.clone()).unwrap();

    assert_eq!(store.get("a@b.com"), Some(profile));
    assert_eq!(store.get("missing@b.com"), None);
    assert_eq!(store.get_all().len(), 1);

    // A fresh store over the same storage sees the persisted profile.
    let rehydrated = ProfileStore::new(storage);
    assert_eq!(rehydrated.get("a@b.com").unwrap().box_name, "CF Mapo");
}

#[test]
fn test_profile_rejects_out_of_range_values() {
    let store = ProfileStore::new(common::test_storage());
    let mut profile = Profile::default_for("Al");
    profile.height_cm = 420.0.into();

    assert!(store.set("a@b.com", profile).is_err());
    assert_eq!(store.get("a@b.com"), None);
}
