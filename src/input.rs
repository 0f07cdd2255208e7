//! Key to intent mapping for the terminal front end.

use crossterm::event::KeyCode;

use crate::types::Intent;

/// Map a pressed key to an input intent. Unbound keys return `None`;
/// whether an intent applies in the current mode is the state machine's
/// call, not the keymap's.
pub fn map_key(code: KeyCode) -> Option<Intent> {
    match code {
        KeyCode::Left | KeyCode::Char('a') => Some(Intent::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') => Some(Intent::MoveRight),
        KeyCode::Up | KeyCode::Char('w') => Some(Intent::Rotate),
        KeyCode::Down => Some(Intent::SoftDrop),
        KeyCode::Char(' ') => Some(Intent::HardDrop),
        KeyCode::Char('p') => Some(Intent::TogglePause),
        KeyCode::Char('q') => Some(Intent::ToggleQuit),
        KeyCode::Char('y') => Some(Intent::ConfirmQuit),
        KeyCode::Char('n') => Some(Intent::CancelQuit),
        KeyCode::Char('s') => Some(Intent::ToggleSound),
        KeyCode::Enter => Some(Intent::Start),
        KeyCode::Char('R') => Some(Intent::RestartFull),
        KeyCode::Char('r') => Some(Intent::RestartMidGame),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Intent::LevelUp),
        KeyCode::Char('-') => Some(Intent::LevelDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_piece_intents() {
        assert_eq!(map_key(KeyCode::Left), Some(Intent::MoveLeft));
        assert_eq!(map_key(KeyCode::Right), Some(Intent::MoveRight));
        assert_eq!(map_key(KeyCode::Up), Some(Intent::Rotate));
        assert_eq!(map_key(KeyCode::Down), Some(Intent::SoftDrop));
        assert_eq!(map_key(KeyCode::Char(' ')), Some(Intent::HardDrop));
    }

    #[test]
    fn quit_prompt_keys_are_distinct_intents() {
        assert_eq!(map_key(KeyCode::Char('q')), Some(Intent::ToggleQuit));
        assert_eq!(map_key(KeyCode::Char('y')), Some(Intent::ConfirmQuit));
        assert_eq!(map_key(KeyCode::Char('n')), Some(Intent::CancelQuit));
    }

    #[test]
    fn restart_keys_distinguish_case() {
        assert_eq!(map_key(KeyCode::Char('r')), Some(Intent::RestartMidGame));
        assert_eq!(map_key(KeyCode::Char('R')), Some(Intent::RestartFull));
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        assert_eq!(map_key(KeyCode::Char('x')), None);
        assert_eq!(map_key(KeyCode::Tab), None);
        assert_eq!(map_key(KeyCode::F(1)), None);
    }
}
