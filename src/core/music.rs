//! Melody table and playback cursor for the background tune.
//!
//! The melody is a fixed 39-note loop. Tempo is a step counter: each step
//! shortens every note duration by 10% of its base value, capped at 5
//! steps (half speed). The cursor survives pause and resume; starting or
//! restarting a game rewinds it.

use crate::types::TEMPO_STEP_MAX;

/// One note of the melody: frequency in Hz and base duration in ms.
pub type Note = (u16, u64);

/// The looping melody, 39 notes.
pub const MELODY: [Note; 39] = [
    (1318, 500),
    (988, 250),
    (1046, 250),
    (1175, 500),
    (1046, 250),
    (988, 250),
    (880, 500),
    (880, 250),
    (1046, 250),
    (1318, 500),
    (1175, 250),
    (1046, 250),
    (988, 500),
    (988, 250),
    (1046, 250),
    (1175, 500),
    (1318, 500),
    (1046, 500),
    (880, 500),
    (880, 1000),
    (1175, 500),
    (1175, 250),
    (1397, 250),
    (1760, 500),
    (1568, 250),
    (1397, 250),
    (1318, 500),
    (1046, 500),
    (1318, 500),
    (1175, 250),
    (1046, 250),
    (988, 500),
    (988, 250),
    (1046, 250),
    (1175, 500),
    (1318, 500),
    (1046, 500),
    (880, 500),
    (880, 1000),
];

/// Playback state: cursor position and tempo step counter.
#[derive(Debug, Clone, Default)]
pub struct MusicState {
    cursor: usize,
    tempo_steps: u32,
}

impl MusicState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorten note durations by one more 10% step, up to the cap.
    pub fn step_tempo(&mut self) {
        if self.tempo_steps < TEMPO_STEP_MAX {
            self.tempo_steps += 1;
        }
    }

    pub fn reset_tempo(&mut self) {
        self.tempo_steps = 0;
    }

    /// Rewind to the start of the melody.
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    pub fn tempo_steps(&self) -> u32 {
        self.tempo_steps
    }

    /// The note at the cursor with tempo applied, advancing the cursor.
    /// Wraps to the start after the final note.
    pub fn next_note(&mut self) -> Note {
        if self.cursor >= MELODY.len() {
            self.cursor = 0;
        }
        let (hz, base_ms) = MELODY[self.cursor];
        self.cursor += 1;
        let ms = base_ms * (10 - self.tempo_steps as u64) / 10;
        (hz, ms)
    }
}
