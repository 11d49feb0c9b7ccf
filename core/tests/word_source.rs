use cartela_core::{
    content_hash, CardError, KeyValueStore, MemoryStore, SelectionStore, Selections,
    WordSourceLoader, SELECTIONS_KEY, WORDS_HASH_KEY, WORDS_JSON_KEY,
};

fn word_json(count: usize) -> String {
    let words: Vec<String> = (0..count).map(|i| format!("palavra {i}")).collect();
    serde_json::to_string(&words).unwrap()
}

fn filled_selections() -> Selections {
    Selections::normalize((0..24).map(|i| format!("palavra {i}")).collect())
}

#[test]
fn first_load_establishes_baseline_without_reset() {
    let storage = MemoryStore::new();
    let raw = word_json(30);
    let mut selections = filled_selections();
    let load = WordSourceLoader::new(&storage).load(Some(&raw), &mut selections);
    assert!(!load.changed);
    assert_eq!(load.words.len(), 30);
    assert_eq!(selections, filled_selections());
    assert_eq!(storage.get(WORDS_JSON_KEY).unwrap(), Some(raw.clone()));
    assert_eq!(storage.get(WORDS_HASH_KEY).unwrap(), Some(content_hash(&raw)));
}

#[test]
fn changed_content_resets_the_card() {
    let storage = MemoryStore::new();
    let loader = WordSourceLoader::new(&storage);
    let mut selections = filled_selections();
    loader.load(Some(&word_json(30)), &mut selections);
    SelectionStore::new(&storage).save(&selections).unwrap();

    let next = word_json(31);
    let load = loader.load(Some(&next), &mut selections);
    assert!(load.changed);
    assert_eq!(selections, Selections::empty());
    assert_eq!(
        storage.get(SELECTIONS_KEY).unwrap(),
        Some(Selections::empty().to_json())
    );
    assert_eq!(storage.get(WORDS_JSON_KEY).unwrap(), Some(next));
}

#[test]
fn identical_content_is_not_a_change() {
    let storage = MemoryStore::new();
    let loader = WordSourceLoader::new(&storage);
    let raw = word_json(24);
    let mut selections = filled_selections();
    assert!(!loader.load(Some(&raw), &mut selections).changed);
    assert!(!loader.load(Some(&raw), &mut selections).changed);
    assert_eq!(selections, filled_selections());
}

#[test]
fn legacy_hash_detects_change() {
    let storage = MemoryStore::new();
    storage
        .set(WORDS_HASH_KEY, &content_hash(&word_json(24)))
        .unwrap();
    let mut selections = filled_selections();
    let load = WordSourceLoader::new(&storage).load(Some(&word_json(25)), &mut selections);
    assert!(load.changed);
    assert_eq!(selections.filled_count(), 0);
}

#[test]
fn malformed_words_load_as_empty_list() {
    let storage = MemoryStore::new();
    let mut selections = Selections::empty();
    let load = WordSourceLoader::new(&storage).load(Some("not json"), &mut selections);
    assert!(load.words.is_empty());
    assert!(matches!(load.issues.as_slice(), [CardError::WordsParse(_)]));
    assert_eq!(storage.get(WORDS_JSON_KEY).unwrap().as_deref(), Some("not json"));
}

#[test]
fn failed_fetch_leaves_snapshot_alone() {
    let storage = MemoryStore::new();
    storage.set(WORDS_JSON_KEY, &word_json(24)).unwrap();
    let mut selections = filled_selections();
    let load = WordSourceLoader::new(&storage).load(None, &mut selections);
    assert!(load.words.is_empty());
    assert!(!load.changed);
    assert_eq!(selections, filled_selections());
    assert_eq!(storage.get(WORDS_JSON_KEY).unwrap(), Some(word_json(24)));
}
