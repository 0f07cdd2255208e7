//! Classic falling-block puzzle game.
//!
//! `core` holds the pure state machine; `session` wraps it in the lock
//! and condvar every thread shares; `sched` runs the gravity and melody
//! loops; the remaining modules are thin collaborators (terminal view,
//! key mapping, audio seam, score persistence).

pub mod audio;
pub mod core;
pub mod input;
pub mod sched;
pub mod score_log;
pub mod session;
pub mod term;
pub mod types;
