//! Game state machine: spawn, move, rotate, lock, clear, spawn.
//!
//! This ties together board, pieces, bag and music bookkeeping. Every
//! mutating entry point is total: inapplicable intents and invalid moves
//! are silent no-ops, so callers never need to pre-validate. Timing and
//! locking live in the session layer; this type is purely synchronous.

use arrayvec::ArrayVec;

use crate::core::bag::PieceBag;
use crate::core::board::Board;
use crate::core::music::MusicState;
use crate::core::pieces::{shape, PieceShape};
use crate::core::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{
    Intent, PieceKind, CLEAR_COOLDOWN_MS, DROP_BASE_MS, DROP_FAST_MS, DROP_LEVEL_STEP_MS,
    LEVEL_MAX, LEVEL_MIN, LINES_PER_LEVEL, LINE_SCORES, PLAY_COL_MIN, SLAM_MAX_STEPS, SPAWN_COL,
    SPAWN_ROW,
};

/// The falling piece. Exists only between spawn and lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: u8,
    pub col: i8,
    pub row: i8,
}

impl ActivePiece {
    fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            col: SPAWN_COL,
            row: SPAWN_ROW,
        }
    }

    pub fn shape(&self) -> PieceShape {
        shape(self.kind, self.rotation)
    }

    /// Absolute cells occupied at the current origin and rotation.
    pub fn cells(&self) -> [(i8, i8); 4] {
        let mut out = [(0, 0); 4];
        for (slot, &(dx, dy)) in out.iter_mut().zip(self.shape().iter()) {
            *slot = (self.col + dx, self.row + dy);
        }
        out
    }
}

/// Complete game state.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    preview: Option<PieceKind>,
    bag: PieceBag,
    music: MusicState,
    score: u64,
    level: u32,
    lines: u32,
    /// Rows cleared by the most recent lock, valid during the clear
    /// cooldown for flash signaling.
    just_cleared: ArrayVec<i8, 4>,
    started: bool,
    paused: bool,
    quitting: bool,
    game_over: bool,
    /// A round is in progress (set on start/restart, cleared at game over).
    alive: bool,
    /// Clear cooldown in effect after a line clear.
    stalled: bool,
    /// Clear cooldown in effect after a hard drop.
    slammed: bool,
    /// Cleared rows should render highlighted.
    flashing: bool,
    sound_on: bool,
    /// The melody should run (stops on pause, quit prompt and game over).
    melody_on: bool,
    /// Terminal flag: both background loops observe it and exit.
    exited: bool,
    /// Final (score, level) awaiting the persistence sink.
    pending_record: Option<(u64, u32)>,
}

impl GameState {
    /// Create a fresh pre-start state with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            preview: None,
            bag: PieceBag::new(seed),
            music: MusicState::new(),
            score: 0,
            level: LEVEL_MIN,
            lines: 0,
            just_cleared: ArrayVec::new(),
            started: false,
            paused: false,
            quitting: false,
            game_over: false,
            alive: false,
            stalled: false,
            slammed: false,
            flashing: false,
            sound_on: true,
            melody_on: false,
            exited: false,
            pending_record: None,
        }
    }

    // --- accessors ---

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn preview(&self) -> Option<PieceKind> {
        self.preview
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn quitting(&self) -> bool {
        self.quitting
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn stalled(&self) -> bool {
        self.stalled
    }

    pub fn slammed(&self) -> bool {
        self.slammed
    }

    pub fn sound_on(&self) -> bool {
        self.sound_on
    }

    pub fn exited(&self) -> bool {
        self.exited
    }

    /// Started and in none of the paused/quitting/game-over modes.
    pub fn is_active(&self) -> bool {
        self.started && !self.paused && !self.quitting && !self.game_over
    }

    /// The melody should be emitting notes right now.
    pub fn music_active(&self) -> bool {
        self.melody_on && self.sound_on && self.started && self.alive
    }

    /// A round is in progress (drop loop should run rather than idle).
    pub fn round_running(&self) -> bool {
        self.alive && self.started
    }

    pub fn music(&self) -> &MusicState {
        &self.music
    }

    /// Next melody note with the current tempo applied.
    pub fn next_note(&mut self) -> (u16, u64) {
        self.music.next_note()
    }

    pub fn request_exit(&mut self) {
        self.exited = true;
    }

    /// Consume the game-over record queued for the persistence sink.
    pub fn take_pending_record(&mut self) -> Option<(u64, u32)> {
        self.pending_record.take()
    }

    // --- intent application ---

    /// Apply one input intent. Returns true when the screen should be
    /// redrawn. Guards make inapplicable intents silent no-ops.
    pub fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::MoveLeft => self.slide(-1),
            Intent::MoveRight => self.slide(1),
            Intent::Rotate => self.rotate(),
            Intent::SoftDrop => {
                if self.is_active() && self.active.is_some() {
                    self.drop_piece();
                    true
                } else {
                    false
                }
            }
            Intent::HardDrop => {
                if self.is_active() && self.active.is_some() {
                    self.slam_piece();
                    true
                } else {
                    false
                }
            }
            Intent::TogglePause => self.toggle_pause(),
            Intent::ToggleQuit => self.toggle_quit(),
            Intent::ConfirmQuit => {
                if self.quitting {
                    self.request_exit();
                }
                false
            }
            Intent::CancelQuit => {
                if self.quitting {
                    self.quitting = false;
                    self.melody_on = true;
                    true
                } else {
                    false
                }
            }
            Intent::ToggleSound => {
                if self.is_active() {
                    self.sound_on = !self.sound_on;
                    true
                } else {
                    false
                }
            }
            Intent::Start => self.start(),
            Intent::RestartFull => {
                if self.game_over {
                    self.restart();
                    true
                } else {
                    false
                }
            }
            Intent::RestartMidGame => {
                if self.is_active() {
                    self.restart();
                    true
                } else {
                    false
                }
            }
            Intent::LevelUp => self.adjust_level(1),
            Intent::LevelDown => self.adjust_level(-1),
        }
    }

    // --- lifecycle ---

    /// Begin a round from the pre-start state. Applies one tempo step per
    /// two selected levels and rewinds the melody.
    fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.alive = true;
        self.melody_on = true;
        self.music.reset_cursor();
        for _ in 0..(self.level / 2) {
            self.music.step_tempo();
        }
        self.spawn_piece();
        true
    }

    /// Reset the session to the pre-start screen: all round state is
    /// discarded, the melody stops and level selection opens up again.
    /// The next start intent begins the new round.
    fn restart(&mut self) {
        self.board.clear();
        self.active = None;
        self.preview = None;
        self.score = 0;
        self.level = LEVEL_MIN;
        self.lines = 0;
        self.just_cleared.clear();
        self.started = false;
        self.paused = false;
        self.quitting = false;
        self.game_over = false;
        self.alive = false;
        self.stalled = false;
        self.slammed = false;
        self.flashing = false;
        self.melody_on = false;
        self.music.reset_tempo();
        self.music.reset_cursor();
    }

    fn adjust_level(&mut self, delta: i32) -> bool {
        if self.started {
            return false;
        }
        let next = (self.level as i32 + delta).clamp(LEVEL_MIN as i32, LEVEL_MAX as i32);
        let changed = next as u32 != self.level;
        self.level = next as u32;
        changed
    }

    fn toggle_pause(&mut self) -> bool {
        if !self.started || self.quitting || self.game_over {
            return false;
        }
        self.paused = !self.paused;
        self.melody_on = !self.paused;
        true
    }

    fn toggle_quit(&mut self) -> bool {
        if !self.started || self.paused || self.game_over {
            return false;
        }
        self.quitting = !self.quitting;
        self.melody_on = !self.quitting;
        true
    }

    fn game_over_actions(&mut self) {
        self.game_over = true;
        self.alive = false;
        self.melody_on = false;
        self.pending_record = Some((self.score, self.level));
    }

    // --- piece mechanics ---

    /// True iff the active piece could sit at (col, row) with the given
    /// rotation. The rotation is taken modulo 4.
    fn is_valid_move(&self, col: i8, row: i8, rotation: u8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if col == -1 {
            return false;
        }
        shape(active.kind, rotation)
            .iter()
            .all(|&(dx, dy)| self.board.is_free(col + dx, row + dy))
    }

    /// Draw the next piece and place it at the spawn cell. The round ends
    /// when the cell below the spawn is already blocked.
    fn spawn_piece(&mut self) {
        let (current, preview) = self.bag.next();
        self.active = Some(ActivePiece::spawn(current));
        self.preview = Some(preview);
        if !self.is_valid_move(SPAWN_COL, SPAWN_ROW + 1, 0) {
            self.game_over_actions();
        }
    }

    /// Move one column left (-1) or right (+1) if the target is free.
    /// Always requests a redraw while a round is active.
    fn slide(&mut self, dir: i8) -> bool {
        if !self.is_active() {
            return false;
        }
        let Some(mut active) = self.active else {
            return false;
        };
        if self.is_valid_move(active.col + dir, active.row, active.rotation) {
            active.col += dir;
            self.active = Some(active);
        }
        true
    }

    /// Rotate clockwise to the next table state if it fits. No wall kicks.
    fn rotate(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        let Some(mut active) = self.active else {
            return false;
        };
        let next = (active.rotation + 1) % 4;
        if self.is_valid_move(active.col, active.row, next) {
            active.rotation = next;
            self.active = Some(active);
        }
        true
    }

    /// Advance the piece one row, locking it when the floor or stack is
    /// reached. This is the sole lock trigger.
    pub fn drop_piece(&mut self) {
        let Some(mut active) = self.active else {
            return;
        };
        if self.is_valid_move(active.col, active.row + 1, active.rotation) {
            active.row += 1;
            self.active = Some(active);
        } else {
            self.lock_piece();
        }
    }

    /// Drop straight to the first collision and lock immediately.
    fn slam_piece(&mut self) {
        let Some(mut active) = self.active else {
            return;
        };
        for _ in 0..SLAM_MAX_STEPS {
            if self.is_valid_move(active.col, active.row + 1, active.rotation) {
                active.row += 1;
                self.active = Some(active);
            } else {
                break;
            }
        }
        self.slammed = true;
        self.lock_piece();
    }

    /// Write the active piece into the board, award the depth bonus, run
    /// the line-clear bookkeeping and spawn the next piece.
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        self.board.lock((active.col, active.row), &active.shape(), active.kind);
        if !self.game_over {
            self.score += (active.row + 1) as u64;
        }
        self.clear_lines();
        if !self.game_over {
            self.spawn_piece();
        }
    }

    /// Clear full rows and fold the result into the counters.
    ///
    /// Each cleared line bumps the line counter; every tenth cumulative
    /// line raises the level, and each even level reached this way (up to
    /// 10) advances the music tempo one step. The line score is awarded
    /// once per lock, multiplied by the level after those level-ups.
    fn clear_lines(&mut self) {
        let cleared = self.board.clear_full_rows();
        for _ in &cleared {
            self.lines += 1;
            if self.lines % LINES_PER_LEVEL == 0 {
                self.level += 1;
                if self.level % 2 == 0 && self.level <= LEVEL_MAX {
                    self.music.step_tempo();
                }
            }
        }
        self.score += LINE_SCORES[cleared.len()] * self.level as u64;
        if !cleared.is_empty() {
            self.stalled = true;
            self.flashing = true;
            self.just_cleared = cleared;
        }
    }

    // --- scheduler hooks ---

    /// Delay before the next gravity step, in milliseconds. Cooldowns
    /// after a clear or hard drop take a fixed pause; above level 9 the
    /// fall rate stops scaling.
    pub fn drop_delay_ms(&self) -> u64 {
        if self.slammed || self.stalled {
            CLEAR_COOLDOWN_MS
        } else if self.level > 9 {
            DROP_FAST_MS
        } else {
            DROP_BASE_MS - DROP_LEVEL_STEP_MS * self.level as u64
        }
    }

    /// End the post-lock cooldown: the slam and stall flags each cover one
    /// scheduler period, and the flash highlight ends with it.
    pub fn end_cooldown(&mut self) {
        if self.slammed {
            self.slammed = false;
        } else {
            self.stalled = false;
        }
        self.flashing = false;
        self.just_cleared.clear();
    }

    // --- rendering ---

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for row in 0..out.board.len() {
            for col in 0..out.board[row].len() {
                out.board[row][col] = self.board.get(col as i8 + PLAY_COL_MIN, row as i8);
            }
        }
        out.active = self.active.map(|a| ActiveSnapshot {
            kind: a.kind,
            cells: a.cells(),
        });
        out.preview = self.preview;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.started = self.started;
        out.paused = self.paused;
        out.quitting = self.quitting;
        out.game_over = self.game_over;
        out.sound_on = self.sound_on;
        out.flashing = self.flashing;
        out.just_cleared.clear();
        out.just_cleared.extend(self.just_cleared.iter().copied());
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PLAY_COL_MAX, TEMPO_STEP_MAX};

    fn started_game() -> GameState {
        let mut game = GameState::new(1);
        game.apply(Intent::Start);
        game
    }

    fn fill_row_except(game: &mut GameState, row: i8, gap_col: i8) {
        for col in PLAY_COL_MIN..=PLAY_COL_MAX {
            if col != gap_col {
                game.board_mut().set(col, row, Some(PieceKind::J));
            }
        }
    }

    #[test]
    fn start_spawns_at_the_spawn_cell() {
        let game = started_game();
        let active = game.active().unwrap();
        assert_eq!((active.col, active.row), (SPAWN_COL, SPAWN_ROW));
        assert_eq!(active.rotation, 0);
        assert!(game.started());
        assert!(game.is_active());
        assert!(game.preview().is_some());
        assert!(game.music_active());
    }

    #[test]
    fn start_is_a_no_op_when_already_started() {
        let mut game = started_game();
        let before = game.active();
        assert!(!game.apply(Intent::Start));
        assert_eq!(game.active(), before);
    }

    #[test]
    fn level_selection_only_before_start_and_clamped() {
        let mut game = GameState::new(1);
        assert!(!game.apply(Intent::LevelDown));
        assert_eq!(game.level(), LEVEL_MIN);
        for _ in 0..20 {
            game.apply(Intent::LevelUp);
        }
        assert_eq!(game.level(), LEVEL_MAX);
        game.apply(Intent::Start);
        assert!(!game.apply(Intent::LevelUp));
        assert_eq!(game.level(), LEVEL_MAX);
    }

    #[test]
    fn start_applies_one_tempo_step_per_two_levels() {
        let mut game = GameState::new(1);
        for _ in 0..4 {
            game.apply(Intent::LevelUp);
        }
        assert_eq!(game.level(), 5);
        game.apply(Intent::Start);
        assert_eq!(game.music().tempo_steps(), 2);
    }

    #[test]
    fn slide_moves_one_column_and_stops_at_walls() {
        let mut game = started_game();
        let start_col = game.active().unwrap().col;
        assert!(game.apply(Intent::MoveLeft));
        assert_eq!(game.active().unwrap().col, start_col - 1);
        for _ in 0..20 {
            game.apply(Intent::MoveLeft);
        }
        let col = game.active().unwrap().col;
        // Hitting the wall is a silent no-op.
        assert!(game.apply(Intent::MoveLeft));
        assert_eq!(game.active().unwrap().col, col);
    }

    #[test]
    fn rotate_cycles_back_to_the_spawn_state() {
        let mut game = started_game();
        let spawn_shape = game.active().unwrap().shape();
        // Drop a few rows so every rotation state has room.
        for _ in 0..4 {
            game.apply(Intent::SoftDrop);
        }
        for _ in 0..4 {
            game.apply(Intent::Rotate);
        }
        assert_eq!(game.active().unwrap().shape(), spawn_shape);
    }

    #[test]
    fn piece_intents_are_ignored_while_paused() {
        let mut game = started_game();
        let before = game.active();
        game.apply(Intent::TogglePause);
        assert!(!game.apply(Intent::MoveLeft));
        assert!(!game.apply(Intent::Rotate));
        assert!(!game.apply(Intent::SoftDrop));
        assert!(!game.apply(Intent::HardDrop));
        assert_eq!(game.active(), before);
    }

    #[test]
    fn lock_awards_the_depth_bonus_and_respawns() {
        let mut game = started_game();
        game.apply(Intent::HardDrop);
        let score = game.score();
        assert!(score > 0, "slam lock must add the depth bonus");
        // A fresh piece spawned at the top.
        let active = game.active().unwrap();
        assert_eq!((active.col, active.row), (SPAWN_COL, SPAWN_ROW));
        assert!(game.slammed());
    }

    #[test]
    fn locked_cells_carry_the_piece_kind_tag() {
        let mut game = started_game();
        let kind = game.active().unwrap().kind;
        game.apply(Intent::HardDrop);
        let tagged = (PLAY_COL_MIN..=PLAY_COL_MAX)
            .filter(|&col| game.board().get(col, 18) == Some(kind))
            .count();
        assert!(tagged >= 1);
    }

    #[test]
    fn line_score_uses_the_post_level_up_level() {
        let mut game = started_game();
        // Two full rows pending; eight lines already on the counter, so
        // this clear crosses the ten-line boundary and raises the level
        // before the score is awarded.
        game.lines = 8;
        fill_row_except(&mut game, 18, 0); // col 0 is a wall: row complete
        fill_row_except(&mut game, 17, 0);
        let before = game.score();
        game.active = Some(ActivePiece {
            kind: PieceKind::O,
            rotation: 0,
            col: 4,
            row: 14,
        });
        game.apply(Intent::HardDrop);
        assert_eq!(game.lines(), 10);
        assert_eq!(game.level(), 2);
        // Depth bonus (row 15 origin -> 16) plus 100 x level 2.
        assert_eq!(game.score() - before, 16 + 100 * 2);
        assert!(game.stalled());
        assert_eq!(game.just_cleared.len(), 2);
    }

    #[test]
    fn double_clear_at_level_three_awards_three_hundred() {
        let mut game = started_game();
        game.level = 3;
        fill_row_except(&mut game, 18, 0);
        fill_row_except(&mut game, 17, 0);
        game.active = Some(ActivePiece {
            kind: PieceKind::O,
            rotation: 0,
            col: 4,
            row: 14,
        });
        let before = game.score();
        game.apply(Intent::HardDrop);
        assert_eq!(game.level(), 3);
        assert_eq!(game.score() - before, 16 + 100 * 3);
    }

    #[test]
    fn four_line_clear_scores_twelve_hundred_per_level() {
        let mut game = started_game();
        for row in 15..=18 {
            fill_row_except(&mut game, row, 5);
        }
        game.active = Some(ActivePiece {
            kind: PieceKind::I,
            rotation: 1,
            col: 4, // vertical I occupies column 5
            row: 10,
        });
        let before = game.score();
        game.apply(Intent::HardDrop);
        assert_eq!(game.lines(), 4);
        assert_eq!(game.level(), LEVEL_MIN);
        assert_eq!(game.score() - before, 16 + 1200 * LEVEL_MIN as u64);
    }

    #[test]
    fn even_levels_step_the_music_tempo() {
        let mut game = started_game();
        assert_eq!(game.music().tempo_steps(), 0);
        // Clear the tenth line nine times, walking the level from 1 to 10.
        for step in 0..9 {
            game.lines = 9 + step * 10;
            fill_row_except(&mut game, 18, 0);
            game.active = Some(ActivePiece {
                kind: PieceKind::O,
                rotation: 0,
                col: 4,
                row: 2,
            });
            game.apply(Intent::HardDrop);
        }
        assert_eq!(game.level(), 10);
        // Levels 2, 4, 6, 8 and 10 each added one step.
        assert_eq!(game.music().tempo_steps(), TEMPO_STEP_MAX);
    }

    #[test]
    fn blocked_spawn_ends_the_round_and_queues_a_record() {
        let mut game = started_game();
        // Wall off the spawn footprint below the spawn row, leaving the
        // rows incomplete so nothing clears.
        for col in 4..=7 {
            for row in 2..=5 {
                game.board_mut().set(col, row, Some(PieceKind::Z));
            }
        }
        game.apply(Intent::HardDrop);
        assert!(game.game_over());
        assert!(!game.is_active());
        assert!(!game.music_active());
        let (score, level) = game.take_pending_record().unwrap();
        assert_eq!(score, game.score());
        assert_eq!(level, game.level());
        assert!(game.take_pending_record().is_none());
    }

    #[test]
    fn pause_guard_excludes_quit_prompt_and_game_over() {
        let mut game = GameState::new(1);
        assert!(!game.apply(Intent::TogglePause));
        game.apply(Intent::Start);
        game.apply(Intent::ToggleQuit);
        assert!(!game.apply(Intent::TogglePause));
        game.apply(Intent::ToggleQuit);
        assert!(game.apply(Intent::TogglePause));
        assert!(game.paused());
        assert!(!game.apply(Intent::ToggleQuit));
    }

    #[test]
    fn cancel_quit_is_inert_outside_the_prompt() {
        let mut game = started_game();
        assert!(!game.apply(Intent::CancelQuit));
        assert!(!game.quitting());
        assert!(game.is_active());
        game.apply(Intent::ToggleQuit);
        assert!(game.quitting());
        assert!(game.apply(Intent::CancelQuit));
        assert!(!game.quitting());
        assert!(game.is_active());
        assert!(game.music_active());
    }

    #[test]
    fn confirm_quit_only_from_the_quit_prompt() {
        let mut game = started_game();
        game.apply(Intent::ConfirmQuit);
        assert!(!game.exited());
        game.apply(Intent::ToggleQuit);
        game.apply(Intent::ConfirmQuit);
        assert!(game.exited());
    }

    #[test]
    fn pause_silences_the_melody_without_rewinding_it() {
        let mut game = started_game();
        let first = game.next_note();
        game.apply(Intent::TogglePause);
        assert!(!game.music_active());
        game.apply(Intent::TogglePause);
        assert!(game.music_active());
        // Cursor kept its place: the second note differs from the first.
        assert_ne!(game.next_note(), first);
    }

    #[test]
    fn sound_toggle_requires_an_active_round() {
        let mut game = GameState::new(1);
        assert!(!game.apply(Intent::ToggleSound));
        game.apply(Intent::Start);
        assert!(game.apply(Intent::ToggleSound));
        assert!(!game.sound_on());
        assert!(!game.music_active());
    }

    #[test]
    fn mid_game_restart_returns_to_the_start_screen() {
        let mut game = started_game();
        game.lines = 23;
        game.level = 3;
        game.score = 999;
        game.board_mut().set(5, 10, Some(PieceKind::T));
        assert!(game.apply(Intent::RestartMidGame));
        assert!(!game.started());
        assert!(game.active().is_none());
        assert_eq!(game.score(), 0);
        assert_eq!(game.level(), LEVEL_MIN);
        assert_eq!(game.lines(), 0);
        assert!(game.board().is_free(5, 10));
        assert!(!game.music_active());
        assert_eq!(game.music().tempo_steps(), 0);
        // Level selection is open again until the next start.
        assert!(game.apply(Intent::LevelUp));
        assert_eq!(game.level(), 2);
        game.apply(Intent::Start);
        assert!(game.is_active());
        assert!(game.active().is_some());
        assert_eq!(game.music().tempo_steps(), 1);
    }

    #[test]
    fn full_restart_requires_game_over() {
        let mut game = started_game();
        assert!(!game.apply(Intent::RestartFull));
        for col in 4..=7 {
            for row in 2..=5 {
                game.board_mut().set(col, row, Some(PieceKind::Z));
            }
        }
        game.apply(Intent::HardDrop);
        assert!(game.game_over());
        assert!(game.apply(Intent::RestartFull));
        assert!(!game.game_over());
        assert!(!game.started());
        assert!(game.active().is_none());
        assert_eq!(game.score(), 0);
        game.apply(Intent::Start);
        assert!(game.is_active());
        assert!(game.music_active());
    }

    #[test]
    fn cooldown_flags_clear_one_per_tick() {
        let mut game = started_game();
        fill_row_except(&mut game, 18, 0);
        game.active = Some(ActivePiece {
            kind: PieceKind::O,
            rotation: 0,
            col: 4,
            row: 14,
        });
        game.apply(Intent::HardDrop);
        assert!(game.slammed());
        assert!(game.stalled());
        game.end_cooldown();
        assert!(!game.slammed());
        assert!(game.stalled());
        assert!(game.just_cleared.is_empty());
        game.end_cooldown();
        assert!(!game.stalled());
    }

    #[test]
    fn drop_delay_scales_with_level_until_nine() {
        let mut game = started_game();
        assert_eq!(game.drop_delay_ms(), 1000);
        game.level = 9;
        assert_eq!(game.drop_delay_ms(), 200);
        game.level = 10;
        assert_eq!(game.drop_delay_ms(), 150);
        game.level = 14;
        assert_eq!(game.drop_delay_ms(), 150);
        game.slammed = true;
        assert_eq!(game.drop_delay_ms(), 800);
        game.slammed = false;
        game.stalled = true;
        assert_eq!(game.drop_delay_ms(), 800);
    }

    #[test]
    fn snapshot_reflects_board_and_active_piece() {
        let mut game = started_game();
        game.board_mut().set(3, 12, Some(PieceKind::S));
        let snap = game.snapshot();
        assert_eq!(snap.board[12][2], Some(PieceKind::S));
        let active = snap.active.unwrap();
        assert_eq!(active.kind, game.active().unwrap().kind);
        assert_eq!(snap.level, game.level());
        assert!(snap.started && !snap.paused);
    }
}
