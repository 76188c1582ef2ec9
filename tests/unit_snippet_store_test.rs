use luna::core::snippets::SnippetStore;
use tempfile::tempdir;

#[test]
fn test_missing_file_loads_as_empty() {
    let dir = tempdir().unwrap();
    let store = SnippetStore::new(dir.path().join("snippets.json"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_ids_are_sequential() {
    let dir = tempdir().unwrap();
    let store = SnippetStore::new(dir.path().join("snippets.json"));
    let first = store.save_snippet("all-users", "luna select-from users").unwrap();
    let second = store.save_snippet("count", "SELECT count(*) FROM users").unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}

#[test]
fn test_value_round_trips_byte_for_byte() {
    let dir = tempdir().unwrap();
    let store = SnippetStore::new(dir.path().join("snippets.json"));
    let value = "luna multiple (insert-into t 1) (select-from t)";
    store.save_snippet("batch", value).unwrap();
    let entry = store.get(1).unwrap().unwrap();
    assert_eq!(entry.key, "batch");
    assert_eq!(entry.value, value);
}

#[test]
fn test_unknown_id_is_none() {
    let dir = tempdir().unwrap();
    let store = SnippetStore::new(dir.path().join("snippets.json"));
    store.save_snippet("a", "b").unwrap();
    assert!(store.get(99).unwrap().is_none());
}

#[test]
fn test_display_format() {
    let dir = tempdir().unwrap();
    let store = SnippetStore::new(dir.path().join("snippets.json"));
    let entry = store.save_snippet("all-users", "luna select-from users").unwrap();
    assert_eq!(entry.to_string(), "1 | all-users | luna select-from users");
}
