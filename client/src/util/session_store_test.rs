use super::*;

fn session() -> Session {
    Session { token: "12|plain".to_owned(), user: serde_json::json!({ "id": 12, "name": "Ana" }) }
}

// =============================================================
// MemorySessionStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemorySessionStore::default();
    assert!(store.read().is_none());
    assert_eq!(store.write_count(), 0);
}

#[test]
fn memory_store_writes_two_entries() {
    let store = MemorySessionStore::default();
    store.write(&session()).unwrap();
    assert_eq!(store.entry(TOKEN_KEY).as_deref(), Some("12|plain"));
    assert_eq!(store.entry(USER_KEY).as_deref(), Some(r#"{"id":12,"name":"Ana"}"#));
    assert_eq!(store.read(), Some(session()));
    assert_eq!(store.write_count(), 1);
}

#[test]
fn memory_store_last_write_wins() {
    let store = MemorySessionStore::default();
    store.write(&session()).unwrap();
    let newer = Session { token: "13|next".to_owned(), user: serde_json::json!({ "id": 13 }) };
    store.write(&newer).unwrap();
    assert_eq!(store.read(), Some(newer));
}

#[test]
fn memory_store_clear_removes_both_entries() {
    let store = MemorySessionStore::default();
    store.write(&session()).unwrap();
    store.clear();
    assert!(store.entry(TOKEN_KEY).is_none());
    assert!(store.entry(USER_KEY).is_none());
    assert!(store.read().is_none());
}

// =============================================================
// Entry decoding
// =============================================================

#[test]
fn decode_requires_both_entries() {
    assert!(decode_entries(Some("t".to_owned()), None).is_none());
    assert!(decode_entries(None, Some("{}".to_owned())).is_none());
    assert!(decode_entries(Some(String::new()), Some("{}".to_owned())).is_none());
}

#[test]
fn decode_rejects_malformed_profile() {
    assert!(decode_entries(Some("t".to_owned()), Some("{not json".to_owned())).is_none());
}

#[test]
fn decode_accepts_cookie_values() {
    let header = "token=12%7Cplain; user=%7B%22id%22%3A12%2C%22name%22%3A%22Ana%22%7D";
    let decoded = decode_entries(
        cookies::find_cookie(header, TOKEN_KEY),
        cookies::find_cookie(header, USER_KEY),
    );
    assert_eq!(decoded, Some(session()));
}

// =============================================================
// CookieSessionStore
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn cookie_store_is_inert_outside_browser() {
    let store = CookieSessionStore;
    assert!(store.read().is_none());
    assert!(matches!(store.write(&session()), Err(SessionStoreError::Write(_))));
    store.clear();
}
