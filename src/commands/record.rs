//! Best-score records
//!
//! Each board size keeps the report of its best run in `<results>/NN.txt`, and
//! the README score table links to it.

use super::solve::SolveReport;
use crate::output::formatters::{group_thousands, parse_score, report_lines};
use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where records are kept
#[derive(Debug, Clone)]
pub struct RecordPaths {
    pub results_dir: PathBuf,
    pub readme: PathBuf,
}

/// What happened when a report was offered as a new record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The report replaced the stored best
    NewBest { previous: u32 },
    /// The stored best is at least as good
    Kept { best: u32 },
}

/// Result file name for a board size, zero-padded to two digits
#[must_use]
pub fn result_file_name(size: usize) -> String {
    format!("{size:02}.txt")
}

/// Best stored score for `size`, or 0 when there is no record yet
///
/// # Errors
///
/// Returns an error if the record exists but cannot be read or its score line is
/// malformed.
pub fn best_known_score(results_dir: &Path, size: usize) -> Result<u32> {
    let path = results_dir.join(result_file_name(size));

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(err) => {
            return Err(err).with_context(|| format!("reading {}", path.display()));
        }
    };

    let score = parse_score(&content)
        .with_context(|| format!("malformed score in {}", path.display()))?;
    Ok(score.unwrap_or(0))
}

/// Store `report` if it beats the best known score for its size
///
/// # Errors
///
/// Returns an error if the record or README cannot be read or written.
pub fn record_if_best(report: &SolveReport, paths: &RecordPaths) -> Result<RecordOutcome> {
    let best = best_known_score(&paths.results_dir, report.size)?;
    if report.score <= best {
        return Ok(RecordOutcome::Kept { best });
    }

    info!(
        "new best for size {}: {} (was {best})",
        report.size, report.score
    );

    fs::create_dir_all(&paths.results_dir)
        .with_context(|| format!("creating {}", paths.results_dir.display()))?;

    let path = paths.results_dir.join(result_file_name(report.size));
    let content = format!("{}\n", report_lines(report).join("\n").trim());
    fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;

    update_readme(&paths.readme, report.size, report.score)?;

    Ok(RecordOutcome::NewBest { previous: best })
}

/// Rewrite the README table row for `size`; a missing README is skipped
///
/// Returns whether a row was rewritten.
///
/// # Errors
///
/// Returns an error if the README exists but cannot be read or written.
pub fn update_readme(readme: &Path, size: usize, score: u32) -> Result<bool> {
    let content = match fs::read_to_string(readme) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(err).with_context(|| format!("reading {}", readme.display())),
    };

    let prefix = format!("| {size} |");
    let row = format!(
        "| {size} | [{}](./results/{}) |",
        group_thousands(u64::from(score)),
        result_file_name(size)
    );

    let mut rewritten = false;
    let lines: Vec<&str> = content
        .lines()
        .map(|line| {
            if line.starts_with(&prefix) {
                rewritten = true;
                row.as_str()
            } else {
                line
            }
        })
        .collect();

    fs::write(readme, format!("{}\n", lines.join("\n").trim()))
        .with_context(|| format!("writing {}", readme.display()))?;

    Ok(rewritten)
}
