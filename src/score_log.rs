//! Persistence seam for final scores.
//!
//! One JSON record per game over, appended as a line to a log file. Sink
//! failures are reported to the caller and swallowed at the session seam;
//! the game itself never notices.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Final standing of one finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Milliseconds since the Unix epoch at game over.
    pub timestamp_ms: u64,
    pub score: u64,
    pub level: u32,
}

pub trait ScoreSink: Send + Sync {
    fn write(&self, record: &ScoreRecord) -> Result<()>;
}

/// Appends one JSON line per record to a file, creating it on first use.
pub struct JsonlScoreSink {
    path: PathBuf,
}

impl JsonlScoreSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreSink for JsonlScoreSink {
    fn write(&self, record: &ScoreRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening score log {}", self.path.display()))?;
        let line = serde_json::to_string(record).context("serializing score record")?;
        writeln!(file, "{line}").context("appending score record")?;
        Ok(())
    }
}

/// Discards every record. For tests and headless runs.
pub struct NullScoreSink;

impl ScoreSink for NullScoreSink {
    fn write(&self, _record: &ScoreRecord) -> Result<()> {
        Ok(())
    }
}
