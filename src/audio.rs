//! Audio backend seam.
//!
//! The music scheduler hands the backend one (frequency, duration) pair
//! at a time and expects the call to last roughly the note's duration;
//! the pacing of the melody comes entirely from that blocking.

use std::thread;
use std::time::Duration;

pub trait AudioBackend: Send {
    /// Emit a tone. May block for the duration.
    fn tone(&mut self, frequency_hz: u16, duration_ms: u64);
}

/// Keeps the melody's timing without producing sound: each note is a
/// plain sleep. Used when no sound device is available.
pub struct SilentAudio;

impl AudioBackend for SilentAudio {
    fn tone(&mut self, _frequency_hz: u16, duration_ms: u64) {
        thread::sleep(Duration::from_millis(duration_ms));
    }
}

/// Discards notes without blocking. For tests.
pub struct NullAudio;

impl AudioBackend for NullAudio {
    fn tone(&mut self, _frequency_hz: u16, _duration_ms: u64) {}
}
