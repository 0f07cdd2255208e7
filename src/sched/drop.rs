//! Gravity loop: advances the active piece on a level-dependent period.
//!
//! Each cycle parks at the pause/quit rendezvous, picks a delay under the
//! lock, sleeps interruptibly, then performs one tick: the post-lock
//! cooldown flags are retired and, when the game is neither paused nor at
//! the quit prompt, the piece drops one row. While no round is running
//! the loop idles on a coarse poll.

use std::thread::{self, JoinHandle};

use crate::session::Session;
use crate::types::IDLE_POLL_MS;

pub fn spawn_drop_loop(session: Session) -> JoinHandle<()> {
    thread::Builder::new()
        .name("drop-loop".into())
        .spawn(move || run(session))
        .expect("spawning the drop loop thread")
}

fn run(session: Session) {
    loop {
        {
            let game = session.lock();
            if game.exited() {
                return;
            }
            if !game.round_running() {
                drop(game);
                session.sleep_interruptible(IDLE_POLL_MS);
                continue;
            }
        }

        // Pause and the quit prompt park the loop here until a toggle or
        // shutdown wakes it.
        session.await_unpaused();

        let delay = {
            let game = session.lock();
            if game.exited() {
                return;
            }
            game.drop_delay_ms()
        };
        session.sleep_interruptible(delay);

        let record = {
            let mut game = session.lock();
            if game.exited() {
                return;
            }
            if !game.round_running() {
                continue;
            }
            game.end_cooldown();
            if !game.paused() && !game.quitting() {
                game.drop_piece();
            }
            game.take_pending_record()
        };
        if let Some((score, level)) = record {
            session.write_record(score, level);
        }
        session.signal_redraw();
    }
}
