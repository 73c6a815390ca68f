//! Grid solving command
//!
//! Loads the dictionary for one board size, runs both solver phases and
//! collects everything the report needs.

use crate::core::{Board, Move, WordList};
use crate::solver::Solver;
use crate::wordlists::load_from_file;
use anyhow::{Context, Result, ensure};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Configuration for solving one board
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub size: usize,
    /// Longest word kept from the dictionary; defaults to the board size
    pub max_word_length: Option<usize>,
    pub dictionary: PathBuf,
    /// Shuffle the dictionary order with this seed before solving
    pub shuffle_seed: Option<u64>,
}

impl SolveConfig {
    #[must_use]
    pub fn new(size: usize, dictionary: impl Into<PathBuf>) -> Self {
        Self {
            size,
            max_word_length: None,
            dictionary: dictionary.into(),
            shuffle_seed: None,
        }
    }

    /// Same settings for another board size
    #[must_use]
    pub fn with_size(&self, size: usize) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }

    /// Word length cutoff applied when loading the dictionary
    #[must_use]
    pub fn word_cutoff(&self) -> usize {
        self.max_word_length.unwrap_or(self.size)
    }
}

/// Result of solving one board
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub size: usize,
    pub score: u32,
    pub moves: Vec<Move>,
    /// Rendered final board
    pub board: String,
    pub elapsed: Duration,
    pub seed: Option<u64>,
    pub dictionary_size: usize,
}

/// Load the dictionary and solve the board described by `config`
///
/// # Errors
///
/// Returns an error if:
/// - The board size is 0
/// - The dictionary cannot be read
/// - The solver produces a move the board refuses
pub fn solve_grid(config: &SolveConfig) -> Result<SolveReport> {
    ensure!(config.size >= 1, "board size must be at least 1");

    let start = Instant::now();

    let mut words = load_from_file(&config.dictionary, config.word_cutoff())
        .with_context(|| format!("loading dictionary for size {}", config.size))?;

    if let Some(seed) = config.shuffle_seed {
        words.shuffle(&mut StdRng::seed_from_u64(seed));
    }

    let mut report = solve_with_words(config.size, &words)?;
    report.elapsed = start.elapsed();
    report.seed = config.shuffle_seed;

    Ok(report)
}

/// Solve a `size`×`size` board against an already loaded dictionary
///
/// Shows one progress tick per filled row.
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid or the solver
/// produces a move the board refuses.
pub fn solve_with_words(size: usize, words: &WordList) -> Result<SolveReport> {
    let start = Instant::now();
    info!("solving size {size} with {} words", words.len());

    let pb = ProgressBar::new(size as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} rows ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let mut board = Board::new(size, words);
    Solver::new(&mut board).solve_with(|_, filled| {
        pb.set_message(format!("score {}", filled.score()));
        pb.inc(1);
    })?;
    pb.finish_and_clear();

    Ok(SolveReport {
        size,
        score: board.score(),
        moves: board.moves().to_vec(),
        board: board.to_string(),
        elapsed: start.elapsed(),
        seed: None,
        dictionary_size: words.len(),
    })
}
