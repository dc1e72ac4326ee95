//! Store behavior over the shared stub adapter, including failure paths.

use pretty_assertions::assert_eq;
use remembery::store::{IdentityStore, MemoryStore, StoreError};
use remembery_test_utils::{StubFailure, StubKv};

#[tokio::test]
async fn write_failure_propagates_and_stores_nothing() {
    let kv = StubKv::failing(StubFailure::Writes);
    let store = MemoryStore::new(kv.clone());

    let err = store
        .remember("keys in the drawer", None)
        .await
        .expect_err("must fail");
    assert!(matches!(err, StoreError::Io(_)), "got {err:?}");
    assert!(kv.snapshot().is_empty());
}

#[tokio::test]
async fn read_failure_propagates() {
    let store = MemoryStore::new(StubKv::failing(StubFailure::Reads));
    let err = store.list().await.expect_err("must fail");
    assert!(matches!(err, StoreError::Io(_)), "got {err:?}");
}

#[tokio::test]
async fn store_and_identity_share_one_adapter() {
    let kv = StubKv::new();
    let store = MemoryStore::new(kv.clone());
    let identity = IdentityStore::new(kv.clone());

    identity.set_name("Ada").await.expect("set name");
    store
        .remember("passport in the safe", None)
        .await
        .expect("remember");

    let snapshot = kv.snapshot();
    assert_eq!(snapshot.get("username").map(String::as_str), Some("Ada"));
    assert!(snapshot.contains_key("memories"));
}

#[tokio::test]
async fn seeded_entries_are_listed() {
    let raw = r#"[{"id":1,"text":"first","time":"2024-04-05T17:34:38.901Z","image":null}]"#;
    let kv = StubKv::with_entries([("memories".to_string(), raw.to_string())]);
    let store = MemoryStore::new(kv);

    let records = store.list().await.expect("list");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text, "first");
}
