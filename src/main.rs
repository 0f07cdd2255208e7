//! Terminal runner: wires the session, the two scheduler threads and the
//! raw-mode input/render loop together.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use retro_tetris::audio::SilentAudio;
use retro_tetris::input::map_key;
use retro_tetris::sched::{spawn_drop_loop, spawn_music_loop};
use retro_tetris::score_log::JsonlScoreSink;
use retro_tetris::session::{NullRedraw, Session};
use retro_tetris::term::{GameView, TerminalRenderer};

const SCORE_LOG_PATH: &str = "scores.jsonl";

/// How long the input poll waits before refreshing the screen anyway.
const FRAME_POLL_MS: u64 = 50;

fn main() -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let session = Session::new(
        seed,
        Box::new(JsonlScoreSink::new(SCORE_LOG_PATH)),
        Box::new(NullRedraw),
    );

    let drop_loop = spawn_drop_loop(session.clone());
    let music_loop = spawn_music_loop(session.clone(), Box::new(SilentAudio));

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&session, &mut term);
    // Always try to restore terminal state.
    let _ = term.exit();

    session.shutdown();
    let _ = drop_loop.join();
    let _ = music_loop.join();
    result
}

fn run(session: &Session, term: &mut TerminalRenderer) -> Result<()> {
    let view = GameView;
    loop {
        if session.exited() {
            return Ok(());
        }
        let lines = view.render(&session.snapshot());
        term.draw(&lines)?;

        if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Esc
                    || (key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL))
                {
                    return Ok(());
                }
                if let Some(intent) = map_key(key.code) {
                    session.handle(intent);
                }
            }
        }
    }
}
