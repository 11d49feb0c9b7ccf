use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::grid::SLOT_COUNT;

/// The 24 playable slots of a card, in reading order skipping the free cell.
/// An empty string marks an unfilled slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<String>", from = "Vec<String>")]
pub struct Selections(Vec<String>);

impl Selections {
    pub fn empty() -> Self {
        Self(vec![String::new(); SLOT_COUNT])
    }

    /// Pads or truncates to exactly `SLOT_COUNT` entries.
    pub fn normalize(mut raw: Vec<String>) -> Self {
        raw.truncate(SLOT_COUNT);
        raw.resize(SLOT_COUNT, String::new());
        Self(raw)
    }

    /// Anything that is not an array is replaced entirely; non-string
    /// elements become empty slots.
    pub fn from_json_value(value: &Value) -> Self {
        let Value::Array(items) = value else {
            return Self::empty();
        };
        let raw = items
            .iter()
            .take(SLOT_COUNT)
            .map(|item| item.as_str().map(str::to_string).unwrap_or_default())
            .collect();
        Self::normalize(raw)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn get(&self, slot: usize) -> &str {
        self.0.get(slot).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, slot: usize, word: impl Into<String>) -> bool {
        let Some(entry) = self.0.get_mut(slot) else {
            return false;
        };
        *entry = word.into();
        true
    }

    pub fn clear(&mut self, slot: usize) -> bool {
        self.set(slot, String::new())
    }

    pub fn reset(&mut self) {
        self.0.iter_mut().for_each(String::clear);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.iter().any(|entry| entry == word)
    }

    pub fn is_filled(&self, slot: usize) -> bool {
        !self.get(slot).trim().is_empty()
    }

    pub fn filled_count(&self) -> usize {
        (0..self.0.len()).filter(|slot| self.is_filled(*slot)).count()
    }

    /// Words that may go into `slot`: anything not used elsewhere, plus
    /// whatever the slot already holds.
    pub fn available_words<'a>(&self, words: &'a [String], slot: usize) -> Vec<&'a str> {
        let current = self.get(slot);
        words
            .iter()
            .map(String::as_str)
            .filter(|word| !self.contains(word) || current == *word)
            .collect()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| String::from("[]"))
    }
}

impl Default for Selections {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<String>> for Selections {
    fn from(raw: Vec<String>) -> Self {
        Self::normalize(raw)
    }
}

impl From<Selections> for Vec<String> {
    fn from(selections: Selections) -> Self {
        selections.0
    }
}
