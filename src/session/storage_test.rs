use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::default();
    assert!(storage.load().is_none());
}

#[test]
fn memory_storage_round_trips_credential() {
    let storage = MemoryStorage::default();
    let credential = Credential::new("tok-1", Some("bearer"));
    storage.save(&credential);
    assert_eq!(storage.load(), Some(credential));
}

#[test]
fn memory_storage_save_overwrites_previous() {
    let storage = MemoryStorage::default();
    storage.save(&Credential::new("tok-1", None));
    storage.save(&Credential::new("tok-2", None));
    assert_eq!(storage.load().map(|c| c.token), Some("tok-2".to_owned()));
}

#[test]
fn memory_storage_clear_removes_credential() {
    let storage = MemoryStorage::default();
    storage.save(&Credential::new("tok-1", None));
    storage.clear();
    assert!(storage.load().is_none());
}
