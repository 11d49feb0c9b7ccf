use crate::error::CardError;
use crate::grid::slot_for_cell;
use crate::selection::Selections;
use crate::status::CardStatus;
use crate::store::{KeyValueStore, SelectionStore};
use crate::view::{config_view, play_view, CardView, ConfigCell, PlayCell};
use crate::words::WordSourceLoader;

/// Everything the card needs across a session: the word list, the 24 slots
/// and whether the word list changed since the previous visit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Card {
    words: Vec<String>,
    selections: Selections,
    words_changed: bool,
}

#[derive(Debug)]
pub struct Boot {
    pub card: Card,
    pub issues: Vec<CardError>,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    /// Startup in fixed order: word source (possibly resetting the saved
    /// card), then saved selections, normalized and written back.
    pub fn boot(storage: &dyn KeyValueStore, word_source: Option<&str>) -> Boot {
        let mut card = Card::new();
        let load = WordSourceLoader::new(storage).load(word_source, &mut card.selections);
        let mut issues = load.issues;
        card.words = load.words;
        card.words_changed = load.changed;

        let loaded = SelectionStore::new(storage).load();
        issues.extend(loaded.issues);
        card.selections = loaded.value;

        Boot { card, issues }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    pub fn words_changed(&self) -> bool {
        self.words_changed
    }

    pub fn status(&self) -> CardStatus {
        CardStatus::from_selections(&self.selections)
    }

    pub fn config_view(&self) -> CardView<ConfigCell> {
        config_view(&self.words, &self.selections)
    }

    pub fn play_view(&self) -> CardView<PlayCell> {
        play_view(&self.selections)
    }

    /// Puts `word` into the slot behind visual `cell` and persists. The
    /// in-memory card is updated even when persisting fails.
    pub fn choose(
        &mut self,
        storage: &dyn KeyValueStore,
        cell: usize,
        word: &str,
    ) -> Result<(), CardError> {
        let slot = slot_for_cell(cell).ok_or(CardError::UnknownCell(cell))?;
        self.selections.set(slot, word);
        SelectionStore::new(storage).save(&self.selections)
    }

    pub fn clear(&mut self, storage: &dyn KeyValueStore, cell: usize) -> Result<(), CardError> {
        self.choose(storage, cell, "")
    }
}
