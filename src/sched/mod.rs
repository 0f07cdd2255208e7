//! Background schedulers: the gravity drop loop and the melody loop.
//! Both run on plain threads and exit once the session requests shutdown.

pub mod drop;
pub mod music;

pub use drop::spawn_drop_loop;
pub use music::spawn_music_loop;
