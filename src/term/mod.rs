//! Terminal front end: a pure text view over snapshots plus the raw-mode
//! renderer that puts it on screen.

pub mod game_view;
pub mod renderer;

pub use game_view::GameView;
pub use renderer::TerminalRenderer;
