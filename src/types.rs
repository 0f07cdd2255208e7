//! Shared types and constants for the game core.
//! This module contains pure data types with no external dependencies.

/// Well dimensions including the permanent wall cells.
/// Columns 0 and 11 and row 19 are walls; the playable area is
/// columns 1-10, rows 0-18.
pub const WELL_COLS: i8 = 12;
pub const WELL_ROWS: i8 = 20;

pub const PLAY_COL_MIN: i8 = 1;
pub const PLAY_COL_MAX: i8 = 10;
pub const PLAY_ROW_MAX: i8 = 18;

/// Fixed spawn cell for a freshly drawn piece.
pub const SPAWN_COL: i8 = 4;
pub const SPAWN_ROW: i8 = 1;

/// Selectable level range. Level may exceed the maximum internally after
/// in-game level-ups; gameplay timing treats everything above 9 uniformly.
pub const LEVEL_MIN: u32 = 1;
pub const LEVEL_MAX: u32 = 10;
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per rows cleared in a single lock event, multiplied by level.
pub const LINE_SCORES: [u64; 5] = [0, 40, 100, 300, 1200];

/// Hard-drop advance bound; the floor is always reached well within this.
pub const SLAM_MAX_STEPS: usize = 18;

/// Drop scheduler timing (milliseconds).
pub const DROP_BASE_MS: u64 = 1100;
pub const DROP_LEVEL_STEP_MS: u64 = 100;
pub const DROP_FAST_MS: u64 = 150;
pub const CLEAR_COOLDOWN_MS: u64 = 800;
pub const IDLE_POLL_MS: u64 = 1000;

/// Music scheduler idle poll (milliseconds).
pub const MUSIC_POLL_MS: u64 = 200;

/// Tempo steps: each step shortens note durations by 10% of the base.
pub const TEMPO_STEP_MAX: u32 = 5;

/// The seven tetromino kinds, in piece-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    Z,
    T,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
    ];

    /// Index into the shape tables.
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::T => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::T => "T",
        }
    }
}

/// Cell of the well (None = free, Some = locked with the kind that locked it).
pub type Cell = Option<PieceKind>;

/// Discrete input intents delivered by the input collaborator.
///
/// Inapplicable intents are silently ignored by the state machine;
/// mode guards live in `GameState::apply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    HardDrop,
    TogglePause,
    ToggleQuit,
    ConfirmQuit,
    CancelQuit,
    ToggleSound,
    Start,
    RestartFull,
    RestartMidGame,
    LevelUp,
    LevelDown,
}
