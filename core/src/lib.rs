pub mod card;
pub mod error;
pub mod grid;
pub mod selection;
pub mod status;
pub mod store;
pub mod view;
pub mod words;

pub use card::{Boot, Card};
pub use error::{CardError, StorageError};
pub use grid::{
    cell_for_slot, is_free_cell, slot_for_cell, CELL_COUNT, COLUMN_HEADERS, FREE_CELL, GRID_SIDE,
    SLOT_COUNT,
};
pub use selection::Selections;
pub use status::{resolve_tab, CardStatus, Tab, WORDS_CHANGED_NOTICE};
pub use store::{
    KeyValueStore, Loaded, MemoryStore, SelectionStore, SELECTIONS_KEY, WORDS_HASH_KEY,
    WORDS_JSON_KEY,
};
pub use view::{config_view, play_view, CardView, ConfigCell, Marks, PlayCell};
pub use words::{
    content_hash, detect_change, parse_word_list, WordLoad, WordSnapshot, WordSourceLoader,
    WordsChanged,
};
