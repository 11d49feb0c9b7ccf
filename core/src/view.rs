use crate::grid::{slot_for_cell, CELL_COUNT, COLUMN_HEADERS, FREE_CELL, GRID_SIDE};
use crate::selection::Selections;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView<C> {
    pub headers: [&'static str; GRID_SIDE],
    pub cells: Vec<C>,
}

impl<C> CardView<C> {
    fn from_cells(cells: Vec<C>) -> Self {
        Self {
            headers: COLUMN_HEADERS,
            cells,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[C]> {
        self.cells.chunks(GRID_SIDE)
    }

    pub fn cell(&self, index: usize) -> Option<&C> {
        self.cells.get(index)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigCell {
    Free,
    Filled { slot: usize, word: String },
    Choice { slot: usize, options: Vec<String> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayCell {
    Free,
    Word { slot: usize, word: String },
}

pub fn config_view(words: &[String], selections: &Selections) -> CardView<ConfigCell> {
    let cells = (0..CELL_COUNT)
        .map(|index| match slot_for_cell(index) {
            None => ConfigCell::Free,
            Some(slot) => {
                let word = selections.get(slot);
                if word.is_empty() {
                    let options = selections
                        .available_words(words, slot)
                        .into_iter()
                        .map(str::to_string)
                        .collect();
                    ConfigCell::Choice { slot, options }
                } else {
                    ConfigCell::Filled {
                        slot,
                        word: word.to_string(),
                    }
                }
            }
        })
        .collect();
    CardView::from_cells(cells)
}

pub fn play_view(selections: &Selections) -> CardView<PlayCell> {
    let cells = (0..CELL_COUNT)
        .map(|index| match slot_for_cell(index) {
            None => PlayCell::Free,
            Some(slot) => PlayCell::Word {
                slot,
                word: selections.get(slot).to_string(),
            },
        })
        .collect();
    CardView::from_cells(cells)
}

/// Per-cell marks of the play grid. Lives only as long as the rendered grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Marks([bool; CELL_COUNT]);

impl Marks {
    pub fn new() -> Self {
        let mut cells = [false; CELL_COUNT];
        cells[FREE_CELL] = true;
        Self(cells)
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, index: usize) -> bool {
        if slot_for_cell(index).is_none() {
            return self.is_marked(index);
        }
        self.0[index] = !self.0[index];
        self.0[index]
    }

    pub fn marked_count(&self) -> usize {
        self.0.iter().filter(|marked| **marked).count()
    }
}

impl Default for Marks {
    fn default() -> Self {
        Self::new()
    }
}
