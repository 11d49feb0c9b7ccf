use crate::error::CardError;
use crate::selection::Selections;
use crate::store::{KeyValueStore, SelectionStore, WORDS_HASH_KEY, WORDS_JSON_KEY};

const HASH_SEED: u32 = 5381;

pub fn parse_word_list(raw: &str) -> Result<Vec<String>, CardError> {
    serde_json::from_str::<Vec<String>>(raw).map_err(CardError::WordsParse)
}

/// DJB2 over UTF-16 code units, rendered in base 36.
pub fn content_hash(raw: &str) -> String {
    let hash = raw
        .encode_utf16()
        .fold(HASH_SEED, |h, unit| h.wrapping_mul(33).wrapping_add(u32::from(unit)));
    to_base36(hash)
}

fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return String::from("0");
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// What was remembered about the word list from the previous session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordSnapshot {
    pub raw: Option<String>,
    pub hash: Option<String>,
}

impl WordSnapshot {
    pub fn of(raw: &str) -> Self {
        Self {
            raw: Some(raw.to_string()),
            hash: Some(content_hash(raw)),
        }
    }

    pub fn read(storage: &dyn KeyValueStore) -> Result<Self, CardError> {
        Ok(Self {
            raw: storage.get(WORDS_JSON_KEY)?,
            hash: storage.get(WORDS_HASH_KEY)?,
        })
    }

    pub fn write(&self, storage: &dyn KeyValueStore) -> Result<(), CardError> {
        if let Some(raw) = self.raw.as_deref() {
            storage.set(WORDS_JSON_KEY, raw)?;
        }
        if let Some(hash) = self.hash.as_deref() {
            storage.set(WORDS_HASH_KEY, hash)?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordsChanged;

/// Compares new content against the previous snapshot. The stored raw text
/// wins whenever it is present; the hash is only consulted for state written
/// before raw text was kept.
pub fn detect_change(previous: &WordSnapshot, raw: &str) -> Option<WordsChanged> {
    let previous_raw = previous.raw.as_deref().filter(|text| !text.is_empty());
    if let Some(previous_raw) = previous_raw {
        return (previous_raw != raw).then_some(WordsChanged);
    }
    let previous_hash = previous.hash.as_deref().filter(|hash| !hash.is_empty())?;
    (previous_hash != content_hash(raw)).then_some(WordsChanged)
}

#[derive(Debug, Default)]
pub struct WordLoad {
    pub words: Vec<String>,
    pub changed: bool,
    pub issues: Vec<CardError>,
}

pub struct WordSourceLoader<'a> {
    storage: &'a dyn KeyValueStore,
}

impl<'a> WordSourceLoader<'a> {
    pub fn new(storage: &'a dyn KeyValueStore) -> Self {
        Self { storage }
    }

    /// Applies freshly fetched word-source text. `None` means the fetch
    /// failed: the list is empty and the stored snapshot is left alone.
    pub fn load(&self, raw: Option<&str>, selections: &mut Selections) -> WordLoad {
        let Some(raw) = raw else {
            return WordLoad::default();
        };
        let mut issues = Vec::new();
        let words = parse_word_list(raw).unwrap_or_else(|err| {
            issues.push(err);
            Vec::new()
        });

        let previous = WordSnapshot::read(self.storage).unwrap_or_else(|err| {
            issues.push(err);
            WordSnapshot::default()
        });
        let changed = detect_change(&previous, raw).is_some();
        if changed {
            let store = SelectionStore::new(self.storage);
            if let Err(err) = store.clear() {
                issues.push(err);
            }
            selections.reset();
            if let Err(err) = store.save(selections) {
                issues.push(err);
            }
        }
        if let Err(err) = WordSnapshot::of(raw).write(self.storage) {
            issues.push(err);
        }

        WordLoad {
            words,
            changed,
            issues,
        }
    }
}
