use ticklist_core::db::open_db;
use ticklist_core::{
    MemoryBackend, Mutation, SqliteBackend, TaskBackend, TaskStore, STORE_KEY,
};

#[test]
fn memory_backend_roundtrip_preserves_every_field() {
    let mut store = TaskStore::new(MemoryBackend::new());
    store.add("buy milk").unwrap();
    let toggled = store.add("walk dog").unwrap();
    store.toggle(toggled.id);

    let original = store.tasks().to_vec();
    let backend = store.into_backend();

    let reloaded = TaskStore::new(backend);
    assert_eq!(reloaded.tasks(), original.as_slice());
}

#[test]
fn load_falls_back_to_empty_on_malformed_bytes() {
    let backend = MemoryBackend::with_payload("]][ definitely not json");
    let store = TaskStore::new(backend);
    assert!(store.is_empty());
}

#[test]
fn load_falls_back_to_empty_on_invalid_record() {
    // Parses as JSON but violates the non-empty-text invariant.
    let payload = format!(
        r#"[{{"id":"{}","text":"   ","done":false,"createdAt":1}}]"#,
        uuid::Uuid::new_v4()
    );
    let store = TaskStore::new(MemoryBackend::with_payload(payload));
    assert!(store.is_empty());
}

#[test]
fn load_falls_back_to_empty_on_duplicate_ids() {
    let id = uuid::Uuid::new_v4();
    let payload = format!(
        r#"[{{"id":"{id}","text":"first","done":false,"createdAt":1}},
            {{"id":"{id}","text":"second","done":true,"createdAt":2}}]"#
    );

    let store = TaskStore::new(MemoryBackend::with_payload(payload));
    assert!(store.is_empty());
}

#[test]
fn load_falls_back_to_empty_when_nothing_stored() {
    let store = TaskStore::new(MemoryBackend::new());
    assert!(store.is_empty());
    assert!(store.last_save_error().is_none());
}

#[test]
fn write_failure_keeps_in_memory_state_authoritative() {
    let mut store = TaskStore::new(MemoryBackend::new());
    store.add("persisted fine").unwrap();
    assert!(store.last_save_error().is_none());

    store.backend_mut().set_fail_writes(true);
    let task = store.add("kept despite failure").unwrap();

    // The mutation landed; only the save failed.
    assert_eq!(store.len(), 2);
    assert_eq!(store.tasks()[0].id, task.id);
    assert!(store.last_save_error().is_some());

    // A later successful save clears the error and writes the full list.
    store.backend_mut().set_fail_writes(false);
    assert_eq!(store.toggle(task.id), Mutation::Applied);
    assert!(store.last_save_error().is_none());

    let reloaded = TaskStore::new(store.into_backend());
    assert_eq!(reloaded.len(), 2);
    assert!(reloaded.tasks()[0].done);
}

#[test]
fn take_save_error_clears_the_report() {
    let mut store = TaskStore::new(MemoryBackend::new());
    store.backend_mut().set_fail_writes(true);
    store.add("doomed write").unwrap();

    assert!(store.take_save_error().is_some());
    assert!(store.last_save_error().is_none());
}

#[test]
fn transient_state_changes_never_persist() {
    let mut store = TaskStore::new(MemoryBackend::new());
    let task = store.add("only me on disk").unwrap();
    let payload_after_add = store.backend_mut().payload().map(str::to_string);

    store.set_filter(ticklist_core::FilterMode::Done);
    store.begin_edit(task.id);
    store.update_draft("draft only");
    store.cancel_edit();

    assert_eq!(
        store.backend_mut().payload().map(str::to_string),
        payload_after_add
    );
}

#[test]
fn sqlite_backend_roundtrip_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ticklist.db");

    let conn = open_db(&path).unwrap();
    let mut store = TaskStore::new(SqliteBackend::new(conn));
    store.add("buy milk").unwrap();
    let toggled = store.add("walk dog").unwrap();
    store.toggle(toggled.id);
    let original = store.tasks().to_vec();
    drop(store);

    let conn = open_db(&path).unwrap();
    let reloaded = TaskStore::new(SqliteBackend::new(conn));
    assert_eq!(reloaded.tasks(), original.as_slice());
}

#[test]
fn sqlite_backend_starts_empty_on_fresh_database() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_db(dir.path().join("fresh.db")).unwrap();

    let store = TaskStore::new(SqliteBackend::new(conn));
    assert!(store.is_empty());
}

#[test]
fn sqlite_backend_recovers_from_corrupt_stored_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.db");

    let conn = open_db(&path).unwrap();
    conn.execute(
        "INSERT INTO kv_store (key, value) VALUES (?1, ?2);",
        rusqlite::params![STORE_KEY, "{ truncated"],
    )
    .unwrap();

    let mut backend = SqliteBackend::new(conn);
    assert!(backend.load().is_empty());

    // The store stays fully usable on top of the corrupt row.
    let mut store = TaskStore::new(backend);
    store.add("fresh start").unwrap();
    assert_eq!(store.len(), 1);

    let reloaded = TaskStore::new(store.into_backend());
    assert_eq!(reloaded.tasks()[0].text, "fresh start");
}
