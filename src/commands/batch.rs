//! Batch solving over a range of board sizes

use super::record::{RecordOutcome, RecordPaths, record_if_best};
use super::solve::{SolveConfig, solve_grid};
use crate::output::{print_record_outcome, print_solve_report};
use anyhow::{Result, ensure};
use colored::Colorize;
use log::info;

/// Board sizes solved when no range is given
pub const DEFAULT_SIZES: std::ops::RangeInclusive<usize> = 6..=30;

/// Score of one size in a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub size: usize,
    pub score: u32,
    pub outcome: Option<RecordOutcome>,
}

/// Solve every size in `from..=to`, printing each report
///
/// Each size reloads the dictionary with its own length cutoff. When `record`
/// is set, improved scores are stored as they are found.
///
/// # Errors
///
/// Returns an error if the range is empty or starts at 0, or on the first size
/// that fails to solve or record.
pub fn run_batch(
    base: &SolveConfig,
    from: usize,
    to: usize,
    record: Option<&RecordPaths>,
) -> Result<Vec<BatchEntry>> {
    ensure!(from >= 1, "board size must be at least 1");
    ensure!(from <= to, "empty size range {from}..={to}");

    info!("batch over sizes {from}..={to}");
    let mut entries = Vec::with_capacity(to - from + 1);

    for size in from..=to {
        println!("{}", format!("Solving for size {size}").bright_cyan());

        let report = solve_grid(&base.with_size(size))?;
        print_solve_report(&report);

        let outcome = record
            .map(|paths| record_if_best(&report, paths))
            .transpose()?;
        if let Some(outcome) = outcome {
            print_record_outcome(size, outcome);
        }

        entries.push(BatchEntry {
            size,
            score: report.score,
            outcome,
        });
    }

    Ok(entries)
}
