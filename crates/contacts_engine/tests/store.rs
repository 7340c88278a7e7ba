use std::collections::HashSet;
use std::fs;

use chrono::{TimeZone, Utc};
use contacts_engine::{ContactMutation, ContactRecord, ContactStore, DataProvider, StoreError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn record(id: &str, first: &str, last: &str, secs: i64) -> ContactRecord {
    let mut record = ContactRecord::empty(id, Utc.timestamp_opt(secs, 0).unwrap());
    record.first = first.to_string();
    record.last = last.to_string();
    record
}

fn seeded() -> ContactStore {
    let mut blank = record("2", "", "", 2);
    blank.favorite = true;
    ContactStore::with_contacts(vec![
        record("3", "Alan", "Turing", 3),
        record("1", "Ada", "Lovelace", 1),
        blank,
    ])
}

fn ids(records: &[ContactRecord]) -> Vec<&str> {
    records.iter().map(|record| record.id.as_str()).collect()
}

#[tokio::test]
async fn all_contacts_without_query() {
    let store = seeded();
    assert_eq!(ids(&store.get_contacts(None).await.unwrap()), vec!["2", "1", "3"]);
    assert_eq!(ids(&store.get_contacts(Some("")).await.unwrap()), vec!["2", "1", "3"]);
}

#[tokio::test]
async fn query_filters_by_name_case_insensitively() {
    let store = seeded();
    assert_eq!(ids(&store.get_contacts(Some("ada")).await.unwrap()), vec!["1"]);
    assert_eq!(ids(&store.get_contacts(Some("TUR")).await.unwrap()), vec!["3"]);
    assert!(store.get_contacts(Some("nobody")).await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_contacts_are_blank_and_unique() {
    let store = ContactStore::in_memory();
    let mut seen = HashSet::new();
    for _ in 0..20 {
        let contact = store.create_empty_contact().await.unwrap();
        assert_eq!(contact.first, "");
        assert_eq!(contact.last, "");
        assert!(!contact.favorite);
        assert!(seen.insert(contact.id.clone()));
    }
    assert_eq!(store.get_contacts(None).await.unwrap().len(), 20);
}

#[tokio::test]
async fn update_applies_only_given_fields() {
    let store = seeded();
    let updated = store
        .update_contact(
            "1",
            ContactMutation {
                favorite: Some(true),
                notes: Some("first programmer".to_string()),
                ..ContactMutation::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.first, "Ada");
    assert!(updated.favorite);
    assert_eq!(updated.notes, "first programmer");
    assert_eq!(store.get_contact("1").await.unwrap(), Some(updated));
}

#[tokio::test]
async fn unknown_ids_are_reported() {
    let store = seeded();
    assert_eq!(store.get_contact("nope").await.unwrap(), None);
    assert!(matches!(
        store.update_contact("nope", ContactMutation::default()).await,
        Err(StoreError::NotFound(id)) if id == "nope"
    ));
    assert!(matches!(
        store.delete_contact("nope").await,
        Err(StoreError::NotFound(_))
    ));
}

#[tokio::test]
async fn delete_removes_contact() {
    let store = seeded();
    store.delete_contact("3").await.unwrap();
    assert_eq!(ids(&store.get_contacts(None).await.unwrap()), vec!["2", "1"]);
}

#[tokio::test]
async fn file_store_survives_reopen() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("contacts.ron");

    let store = ContactStore::open(&path).unwrap();
    assert!(store.get_contacts(None).await.unwrap().is_empty());
    let created = store.create_empty_contact().await.unwrap();
    store
        .update_contact(
            &created.id,
            ContactMutation {
                first: Some("Grace".to_string()),
                last: Some("Hopper".to_string()),
                ..ContactMutation::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(store.path(), Some(path.clone()));

    let reopened = ContactStore::open(&path).unwrap();
    let contacts = reopened.get_contacts(None).await.unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].id, created.id);
    assert_eq!(contacts[0].first, "Grace");
    assert_eq!(contacts[0].last, "Hopper");
}

#[test]
fn corrupt_file_fails_to_open() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("contacts.ron");
    fs::write(&path, "this is not ron (").unwrap();
    assert!(matches!(
        ContactStore::open(&path),
        Err(StoreError::Decode(_))
    ));
}

#[tokio::test]
async fn failed_write_leaves_store_unchanged() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");
    let store = ContactStore::open(&data_dir.join("contacts.ron")).unwrap();
    // The data directory is now a regular file, so every save fails.
    fs::write(&data_dir, "x").unwrap();

    assert!(matches!(
        store.create_empty_contact().await,
        Err(StoreError::Persist(_))
    ));
    assert!(store.get_contacts(None).await.unwrap().is_empty());
}
