//! Formatting utilities for reports and terminal output

use crate::commands::SolveReport;
use std::time::Duration;

/// Prefix of the report line holding the final score
pub const SCORE_PREFIX: &str = "Score: ";

/// Format an integer with comma thousands separators
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

/// Milliseconds with two decimals and grouped thousands
#[must_use]
pub fn format_millis(elapsed: Duration) -> String {
    let hundredths = u64::try_from((elapsed.as_micros() + 5) / 10).unwrap_or(u64::MAX);
    format!("{}.{:02}", group_thousands(hundredths / 100), hundredths % 100)
}

/// Plain-text report of a solving run, one entry per line
///
/// This is also the format of the stored result files.
#[must_use]
pub fn report_lines(report: &SolveReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.moves.len() + 10);

    lines.push(String::new());
    lines.push(format!(
        "Moves ({}):",
        group_thousands(report.moves.len() as u64)
    ));
    lines.extend(report.moves.iter().map(ToString::to_string));
    lines.push(String::new());
    lines.push("Board:".to_string());
    lines.push(report.board.clone());
    lines.push(String::new());
    lines.push(format!(
        "{SCORE_PREFIX}{}",
        group_thousands(u64::from(report.score))
    ));
    if let Some(seed) = report.seed {
        lines.push(format!("Shuffle seed: {seed}"));
    }
    lines.push(String::new());
    lines.push(format!(
        "Solving for size {} took {}ms",
        report.size,
        format_millis(report.elapsed)
    ));

    lines
}

/// Parse the score out of a stored report, if it has one
///
/// # Errors
/// Returns the parse error when the score line holds something other than a number.
pub fn parse_score(report: &str) -> Result<Option<u32>, std::num::ParseIntError> {
    report
        .lines()
        .find_map(|line| line.strip_prefix(SCORE_PREFIX))
        .map(|score| score.trim().replace(',', "").parse())
        .transpose()
}
