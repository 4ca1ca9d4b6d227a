use super::*;

#[test]
fn memory_store_round_trips() {
    let store = MemoryStore::new();
    assert_eq!(store.load(), None);

    store.save("tok-1");
    assert_eq!(store.load(), Some("tok-1".to_owned()));

    store.save("tok-2");
    assert_eq!(store.load(), Some("tok-2".to_owned()));
}

#[test]
fn memory_store_clear_is_idempotent() {
    let store = MemoryStore::new();
    store.clear();

    store.save("tok");
    store.clear();
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn memory_store_clones_share_the_slot() {
    let store = MemoryStore::new();
    let alias = store.clone();

    store.save("tok");
    assert_eq!(alias.load(), Some("tok".to_owned()));

    alias.clear();
    assert_eq!(store.load(), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_store_is_inert_off_browser() {
    let durable = BrowserStore::local();
    durable.save("tok");
    assert_eq!(durable.load(), None);
    durable.clear();

    let ephemeral = BrowserStore::session();
    assert_eq!(ephemeral.load(), None);
}
