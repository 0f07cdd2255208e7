//! Session: the single synchronization point around the game state.
//!
//! One mutex guards the whole `GameState`; every mutating path (input
//! intents, the drop loop, the music loop) goes through it, so piece
//! mutations never interleave. One condvar paired with the mutex serves
//! both the pause/quit rendezvous and interruptible sleeps: toggling
//! pause or quit and requesting shutdown notify all waiters.

use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crate::core::{GameSnapshot, GameState};
use crate::score_log::{ScoreRecord, ScoreSink};
use crate::types::Intent;

/// Notified after any state change that should reach the screen.
pub trait RedrawSignal: Send + Sync {
    fn redraw(&self);
}

/// No-op signal for headless use.
pub struct NullRedraw;

impl RedrawSignal for NullRedraw {
    fn redraw(&self) {}
}

struct SessionInner {
    game: Mutex<GameState>,
    wakeup: Condvar,
    sink: Box<dyn ScoreSink>,
    redraw: Box<dyn RedrawSignal>,
}

/// Shared handle to one running game. Clones refer to the same state.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

impl Session {
    pub fn new(seed: u32, sink: Box<dyn ScoreSink>, redraw: Box<dyn RedrawSignal>) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                game: Mutex::new(GameState::new(seed)),
                wakeup: Condvar::new(),
                sink,
                redraw,
            }),
        }
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, GameState> {
        self.inner.game.lock().unwrap()
    }

    /// Apply one input intent, persist any game-over record it produced,
    /// wake the schedulers and signal a redraw when warranted.
    pub fn handle(&self, intent: Intent) {
        let (should_redraw, record) = {
            let mut game = self.lock();
            let should_redraw = game.apply(intent);
            let record = game.take_pending_record();
            self.inner.wakeup.notify_all();
            (should_redraw, record)
        };
        if let Some((score, level)) = record {
            self.write_record(score, level);
        }
        if should_redraw {
            self.inner.redraw.redraw();
        }
    }

    /// Run a closure under the state lock. For setup and inspection.
    pub fn with_game<R>(&self, f: impl FnOnce(&mut GameState) -> R) -> R {
        let mut game = self.lock();
        f(&mut game)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.lock().snapshot()
    }

    pub fn exited(&self) -> bool {
        self.lock().exited()
    }

    /// Request termination and wake every blocked loop.
    pub fn shutdown(&self) {
        self.lock().request_exit();
        self.inner.wakeup.notify_all();
    }

    pub fn signal_redraw(&self) {
        self.inner.redraw.redraw();
    }

    /// Block while the game sits in pause or the quit prompt. Returns
    /// immediately once shutdown is requested.
    pub(crate) fn await_unpaused(&self) {
        let mut game = self.lock();
        while (game.paused() || game.quitting()) && !game.exited() {
            game = self.inner.wakeup.wait(game).unwrap();
        }
    }

    /// Sleep for `ms`, waking early only when shutdown is requested.
    pub(crate) fn sleep_interruptible(&self, ms: u64) {
        let deadline = Instant::now() + Duration::from_millis(ms);
        let mut game = self.lock();
        loop {
            if game.exited() {
                return;
            }
            let now = Instant::now();
            if now >= deadline {
                return;
            }
            let (guard, _) = self.inner.wakeup.wait_timeout(game, deadline - now).unwrap();
            game = guard;
        }
    }

    /// Persist a game-over record, ignoring sink failures.
    pub(crate) fn write_record(&self, score: u64, level: u32) {
        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let _ = self.inner.sink.write(&ScoreRecord {
            timestamp_ms,
            score,
            level,
        });
    }
}
