use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_missing_key_is_none() {
    let store = MemoryStore::new();
    assert!(matches!(store.get_item("entries"), Ok(None)));
}

#[test]
fn memory_store_set_then_get_returns_value() {
    let mut store = MemoryStore::new();
    store.set_item("entries", "[]").expect("set");
    assert_eq!(store.get_item("entries").expect("get").as_deref(), Some("[]"));
    assert_eq!(store.raw("entries"), Some("[]"));
}

#[test]
fn memory_store_set_overwrites_previous_value() {
    let mut store = MemoryStore::with_item("k", "old");
    store.set_item("k", "new").expect("set");
    assert_eq!(store.raw("k"), Some("new"));
}

// =============================================================
// LocalStorage (non-browser build)
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_is_unavailable_off_browser() {
    let mut store = LocalStorage;
    assert!(matches!(store.get_item("entries"), Err(StoreError::Unavailable)));
    assert!(matches!(store.set_item("entries", "[]"), Err(StoreError::Unavailable)));
}

// =============================================================
// JSON helpers
// =============================================================

#[test]
fn load_json_absent_key_is_none() {
    let store = MemoryStore::new();
    let loaded: Option<Vec<u32>> = load_json(&store, "nums").expect("load");
    assert!(loaded.is_none());
}

#[test]
fn load_json_decodes_stored_value() {
    let store = MemoryStore::with_item("nums", "[1,2,3]");
    let loaded: Option<Vec<u32>> = load_json(&store, "nums").expect("load");
    assert_eq!(loaded, Some(vec![1, 2, 3]));
}

#[test]
fn load_json_malformed_value_is_codec_error() {
    let store = MemoryStore::with_item("nums", "{not json");
    let loaded: Result<Option<Vec<u32>>, _> = load_json(&store, "nums");
    assert!(matches!(loaded, Err(StoreError::Codec(_))));
}

#[test]
fn save_json_writes_compact_json() {
    let mut store = MemoryStore::new();
    save_json(&mut store, "nums", &vec![4, 5]).expect("save");
    assert_eq!(store.raw("nums"), Some("[4,5]"));
}

#[test]
fn store_error_messages_are_descriptive() {
    assert_eq!(StoreError::Unavailable.to_string(), "storage unavailable");
    assert_eq!(
        StoreError::Write("QuotaExceededError".to_owned()).to_string(),
        "storage write failed: QuotaExceededError"
    );
}
