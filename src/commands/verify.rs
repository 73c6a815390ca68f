//! Move log replay
//!
//! Replays a stored move log on a fresh board so a recorded score can be
//! checked independently of the solver.

use super::solve::SolveConfig;
use crate::core::{Board, BoardError, Move, MoveParseError, WordList};
use crate::wordlists::load_from_file;
use anyhow::{Context, Result, ensure};
use std::fs;
use std::path::Path;

/// Why a log failed to replay; line numbers start at 1
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("line {line}: cannot parse move")]
    Parse {
        line: usize,
        #[source]
        source: MoveParseError,
    },
    #[error("line {line}: move rejected")]
    Illegal {
        line: usize,
        #[source]
        source: BoardError,
    },
}

/// Outcome of a successful replay
#[derive(Debug, Clone)]
pub struct VerifyReport {
    pub size: usize,
    pub moves: usize,
    pub score: u32,
    pub board: String,
}

/// Replay `log` on an empty `size`×`size` board
///
/// Blank lines are ignored. Stops at the first line that does not parse or is
/// not legal at that point.
///
/// # Errors
///
/// Returns [`VerifyError`] naming the offending line.
pub fn verify_log(size: usize, words: &WordList, log: &str) -> Result<VerifyReport, VerifyError> {
    let mut board = Board::new(size, words);

    for (index, text) in log.lines().enumerate() {
        let line = index + 1;
        if text.trim().is_empty() {
            continue;
        }

        let mv: Move = text
            .parse()
            .map_err(|source| VerifyError::Parse { line, source })?;
        board
            .apply(mv)
            .map_err(|source| VerifyError::Illegal { line, source })?;
    }

    Ok(VerifyReport {
        size,
        moves: board.moves().len(),
        score: board.score(),
        board: board.to_string(),
    })
}

/// Load the dictionary from `config` and replay the log file at `log_path`
///
/// # Errors
///
/// Returns an error if the size is 0, a file cannot be read, or the log does not
/// replay.
pub fn verify_file(config: &SolveConfig, log_path: &Path) -> Result<VerifyReport> {
    ensure!(config.size >= 1, "board size must be at least 1");

    let words = load_from_file(&config.dictionary, config.word_cutoff())?;
    let log = fs::read_to_string(log_path)
        .with_context(|| format!("reading move log {}", log_path.display()))?;

    verify_log(config.size, &words, &log)
        .with_context(|| format!("replaying {}", log_path.display()))
}
