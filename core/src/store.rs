use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{CardError, StorageError};
use crate::selection::Selections;

pub const SELECTIONS_KEY: &str = "bingo-cartela";
pub const WORDS_JSON_KEY: &str = "bingo-words-json";
pub const WORDS_HASH_KEY: &str = "bingo-words-hash";

/// String-keyed durable storage. The browser build backs this with
/// `localStorage`; tests and storage-less sessions use [`MemoryStore`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// A value that is always usable, plus whatever went wrong producing it.
#[derive(Debug)]
pub struct Loaded<T> {
    pub value: T,
    pub issues: Vec<CardError>,
}

pub struct SelectionStore<'a> {
    storage: &'a dyn KeyValueStore,
}

impl<'a> SelectionStore<'a> {
    pub fn new(storage: &'a dyn KeyValueStore) -> Self {
        Self { storage }
    }

    pub fn save(&self, selections: &Selections) -> Result<(), CardError> {
        self.storage.set(SELECTIONS_KEY, &selections.to_json())?;
        Ok(())
    }

    /// Reads the saved card, normalizes it and writes the normalized form
    /// back. Never fails; problems are reported in `issues`.
    pub fn load(&self) -> Loaded<Selections> {
        let mut issues = Vec::new();
        let raw = match self.storage.get(SELECTIONS_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                issues.push(CardError::from(err));
                None
            }
        };
        let selections = match raw.as_deref().filter(|raw| !raw.is_empty()) {
            Some(raw) => match serde_json::from_str::<serde_json::Value>(raw) {
                Ok(value) => Selections::from_json_value(&value),
                Err(err) => {
                    issues.push(CardError::SelectionsParse(err));
                    Selections::empty()
                }
            },
            None => Selections::empty(),
        };
        if let Err(err) = self.save(&selections) {
            issues.push(err);
        }
        Loaded {
            value: selections,
            issues,
        }
    }

    pub fn clear(&self) -> Result<(), CardError> {
        self.storage.remove(SELECTIONS_KEY)?;
        Ok(())
    }
}
