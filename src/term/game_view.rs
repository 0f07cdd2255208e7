//! GameView: maps a `GameSnapshot` into terminal text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snapshot::{GameSnapshot, VIEW_COLS, VIEW_ROWS};
use crate::core::{shape, ActiveSnapshot};
use crate::types::{Cell, PieceKind, PLAY_COL_MIN};

/// Each well cell renders as two columns of text.
const CELL_W: usize = 2;

pub struct GameView;

impl Default for GameView {
    fn default() -> Self {
        Self
    }
}

impl GameView {
    /// Render the snapshot as one text line per screen row.
    pub fn render(&self, snap: &GameSnapshot) -> Vec<String> {
        let mut lines = Vec::with_capacity(VIEW_ROWS + 2);
        let border: String = "+".to_string() + &"-".repeat(VIEW_COLS * CELL_W) + "+";
        lines.push(border.clone());

        for row in 0..VIEW_ROWS {
            let mut line = String::with_capacity(VIEW_COLS * CELL_W + 2);
            line.push('|');
            let flash_row = snap.flashing && snap.just_cleared.contains(&(row as i8));
            for col in 0..VIEW_COLS {
                let cell = effective_cell(snap, row, col);
                line.push_str(&cell_glyph(cell, flash_row));
            }
            line.push('|');
            self.push_panel_text(snap, row, &mut line);
            lines.push(line);
        }

        lines.push(border);
        lines.push(String::new());
        lines.push(status_line(snap));
        lines
    }

    /// Side panel: score block and the preview, aligned with well rows.
    fn push_panel_text(&self, snap: &GameSnapshot, row: usize, line: &mut String) {
        let text = match row {
            1 => format!("  SCORE {}", snap.score),
            2 => format!("  LEVEL {}", snap.level),
            3 => format!("  LINES {}", snap.lines),
            5 => "  NEXT".to_string(),
            6..=9 => preview_line(snap.preview, row - 6),
            _ => return,
        };
        line.push_str(&text);
    }
}

fn effective_cell(snap: &GameSnapshot, row: usize, col: usize) -> Cell {
    if let Some(kind) = active_kind_at(snap.active.as_ref(), row, col) {
        return Some(kind);
    }
    snap.board[row][col]
}

fn active_kind_at(active: Option<&ActiveSnapshot>, row: usize, col: usize) -> Option<PieceKind> {
    let active = active?;
    let well_col = col as i8 + PLAY_COL_MIN;
    let well_row = row as i8;
    active
        .cells
        .iter()
        .any(|&(c, r)| c == well_col && r == well_row)
        .then_some(active.kind)
}

fn cell_glyph(cell: Cell, flash: bool) -> String {
    if flash {
        return "==".to_string();
    }
    match cell {
        Some(kind) => kind.as_str().repeat(CELL_W),
        None => " .".to_string(),
    }
}

fn preview_line(preview: Option<PieceKind>, mini_row: usize) -> String {
    let Some(kind) = preview else {
        return String::new();
    };
    let cells = shape(kind, 0);
    let mut line = "  ".to_string();
    for mini_col in 0..4 {
        let filled = cells
            .iter()
            .any(|&(dx, dy)| dx as usize == mini_col && dy as usize == mini_row);
        line.push_str(if filled { "[]" } else { "  " });
    }
    line
}

fn status_line(snap: &GameSnapshot) -> String {
    if !snap.started {
        return " ENTER to start   +/- level   arrows move   space drops".to_string();
    }
    if snap.game_over {
        return " GAME OVER   R restarts".to_string();
    }
    if snap.quitting {
        return " QUIT? y/n".to_string();
    }
    if snap.paused {
        return " PAUSED   p resumes".to_string();
    }
    let sound = if snap.sound_on { "on" } else { "off" };
    format!(" p pause   q quit   r restart   s sound ({sound})")
}
