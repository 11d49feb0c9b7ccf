pub const GRID_SIDE: usize = 5;
pub const CELL_COUNT: usize = GRID_SIDE * GRID_SIDE;
pub const FREE_CELL: usize = 12;
pub const SLOT_COUNT: usize = CELL_COUNT - 1;

pub const COLUMN_HEADERS: [&str; GRID_SIDE] = ["B", "I", "N", "G", "O"];

pub fn is_free_cell(index: usize) -> bool {
    index == FREE_CELL
}

/// Maps a visual cell (reading order, 0..25) to its slot in the selection
/// array. The free center cell has no slot.
pub fn slot_for_cell(index: usize) -> Option<usize> {
    if index >= CELL_COUNT || is_free_cell(index) {
        return None;
    }
    if index < FREE_CELL {
        Some(index)
    } else {
        Some(index - 1)
    }
}

pub fn cell_for_slot(slot: usize) -> Option<usize> {
    if slot >= SLOT_COUNT {
        return None;
    }
    if slot < FREE_CELL {
        Some(slot)
    } else {
        Some(slot + 1)
    }
}
