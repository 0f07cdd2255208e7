//! Render-facing copy of the game state.
//!
//! The renderer reads a `GameSnapshot` taken under the session lock and
//! draws from it with the lock released. The grid covers only the playable
//! area; the walls are a fixed frame the view draws itself.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind};

/// Playable area dimensions (walls excluded).
pub const VIEW_ROWS: usize = 19;
pub const VIEW_COLS: usize = 10;

/// The falling piece as absolute well cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub cells: [(i8, i8); 4],
}

#[derive(Debug, Clone, Default)]
pub struct GameSnapshot {
    /// Playable cells, indexed `[row][col]` with column 1 at index 0.
    pub board: [[Cell; VIEW_COLS]; VIEW_ROWS],
    pub active: Option<ActiveSnapshot>,
    pub preview: Option<PieceKind>,
    pub score: u64,
    pub level: u32,
    pub lines: u32,
    pub started: bool,
    pub paused: bool,
    pub quitting: bool,
    pub game_over: bool,
    pub sound_on: bool,
    pub flashing: bool,
    /// Rows to highlight while the clear cooldown lasts.
    pub just_cleared: ArrayVec<i8, 4>,
}
