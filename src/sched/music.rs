//! Melody loop: feeds the audio backend one note at a time.
//!
//! The note to play is picked under the lock; the (blocking) tone call
//! happens with the lock released so input and gravity never wait on the
//! audio backend. Whenever the melody is silenced the loop polls on a
//! short period, leaving the cursor wherever it stopped.

use std::thread::{self, JoinHandle};

use crate::audio::AudioBackend;
use crate::session::Session;
use crate::types::MUSIC_POLL_MS;

pub fn spawn_music_loop(session: Session, audio: Box<dyn AudioBackend>) -> JoinHandle<()> {
    thread::Builder::new()
        .name("music-loop".into())
        .spawn(move || run(session, audio))
        .expect("spawning the music loop thread")
}

fn run(session: Session, mut audio: Box<dyn AudioBackend>) {
    loop {
        let note = {
            let mut game = session.lock();
            if game.exited() {
                return;
            }
            if game.music_active() {
                Some(game.next_note())
            } else {
                None
            }
        };
        match note {
            Some((hz, ms)) => audio.tone(hz, ms),
            None => session.sleep_interruptible(MUSIC_POLL_MS),
        }
    }
}
