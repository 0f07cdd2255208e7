//! Board module: the well grid and its collision/placement queries.
//!
//! The well is 12x20 cells; columns 0 and 11 and row 19 are permanent
//! walls, leaving a 10x19 playable area. Playable cells store the kind of
//! the piece that locked them, which is all the renderer needs for color.

use arrayvec::ArrayVec;

use crate::core::pieces::PieceShape;
use crate::types::{
    Cell, PieceKind, PLAY_COL_MAX, PLAY_COL_MIN, PLAY_ROW_MAX, WELL_COLS, WELL_ROWS,
};

/// The well. Indexed `[col][row]`, rows growing downward.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: [[Cell; WELL_ROWS as usize]; WELL_COLS as usize],
}

impl Board {
    /// Create an empty well (walls are positional, not stored).
    pub fn new() -> Self {
        Self {
            cells: [[None; WELL_ROWS as usize]; WELL_COLS as usize],
        }
    }

    fn is_wall(col: i8, row: i8) -> bool {
        col == 0 || col == WELL_COLS - 1 || row == WELL_ROWS - 1
    }

    /// True iff the cell is inside the playable area, not a wall, and not
    /// locked. Out-of-range coordinates return false, never panic.
    pub fn is_free(&self, col: i8, row: i8) -> bool {
        if col < 0 || col >= WELL_COLS || row < 0 || row >= WELL_ROWS {
            return false;
        }
        if Self::is_wall(col, row) {
            return false;
        }
        self.cells[col as usize][row as usize].is_none()
    }

    /// The locked-piece tag at a cell, if any. Walls and out-of-range
    /// coordinates read as empty.
    pub fn get(&self, col: i8, row: i8) -> Cell {
        if col < 0 || col >= WELL_COLS || row < 0 || row >= WELL_ROWS {
            return None;
        }
        self.cells[col as usize][row as usize]
    }

    /// Set a playable cell directly. Returns false for wall or
    /// out-of-range coordinates. Intended for tests and board setup.
    pub fn set(&mut self, col: i8, row: i8, cell: Cell) -> bool {
        if col < 0 || col >= WELL_COLS || row < 0 || row >= WELL_ROWS || Self::is_wall(col, row) {
            return false;
        }
        self.cells[col as usize][row as usize] = cell;
        true
    }

    /// Mark each absolute cell (origin + offset) as locked with the given
    /// kind tag. No collision validation; the caller must have checked the
    /// placement first. Out-of-range cells are skipped.
    pub fn lock(&mut self, origin: (i8, i8), shape: &PieceShape, kind: PieceKind) {
        for &(dx, dy) in shape {
            let col = origin.0 + dx;
            let row = origin.1 + dy;
            if col >= 0 && col < WELL_COLS && row >= 0 && row < WELL_ROWS {
                self.cells[col as usize][row as usize] = Some(kind);
            }
        }
    }

    /// True iff every playable column in the row is occupied.
    pub fn row_full(&self, row: i8) -> bool {
        if !(0..=PLAY_ROW_MAX).contains(&row) {
            return false;
        }
        (PLAY_COL_MIN..=PLAY_COL_MAX).all(|col| self.cells[col as usize][row as usize].is_some())
    }

    /// Remove a row: every row above shifts down by one and the top
    /// playable row becomes empty. Rows below are unaffected.
    fn delete_row(&mut self, row: i8) {
        for r in (1..=row).rev() {
            for col in PLAY_COL_MIN..=PLAY_COL_MAX {
                self.cells[col as usize][r as usize] = self.cells[col as usize][(r - 1) as usize];
            }
        }
        for col in PLAY_COL_MIN..=PLAY_COL_MAX {
            self.cells[col as usize][0] = None;
        }
    }

    /// Clear all full rows, cascading.
    ///
    /// Scans from the bottom-most playable row upward. Each full row is
    /// removed one at a time and the same index is re-examined before the
    /// scan continues, because the shift brings a new row into that slot.
    /// Returns the cleared rows at their pre-shift positions (at most 4),
    /// so callers can highlight them where the player saw them.
    pub fn clear_full_rows(&mut self) -> ArrayVec<i8, 4> {
        let mut cleared = ArrayVec::new();
        let mut row = PLAY_ROW_MAX;
        while row >= 0 {
            if self.row_full(row) {
                // Undo the earlier shifts to recover the original index.
                let visual = row - cleared.len() as i8;
                if cleared.try_push(visual).is_err() {
                    break;
                }
                self.delete_row(row);
                continue;
            }
            row -= 1;
        }
        cleared
    }

    /// Reset the well to empty.
    pub fn clear(&mut self) {
        self.cells = [[None; WELL_ROWS as usize]; WELL_COLS as usize];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
