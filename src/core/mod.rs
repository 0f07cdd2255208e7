//! Pure game logic: board, pieces, bag, music bookkeeping and the state
//! machine. Nothing in here touches a clock, a thread or the terminal.

pub mod bag;
pub mod board;
pub mod game;
pub mod music;
pub mod pieces;
pub mod snapshot;

pub use bag::{PieceBag, SimpleRng};
pub use board::Board;
pub use game::{ActivePiece, GameState};
pub use music::{MusicState, MELODY};
pub use pieces::{shape, CellOffset, PieceShape};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
