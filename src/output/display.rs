//! Display functions for command results

use super::formatters::{format_millis, group_thousands};
use crate::commands::{BatchEntry, RecordOutcome, SolveReport, VerifyReport};
use colored::Colorize;

fn banner(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

fn score_text(score: u32) -> String {
    group_thousands(u64::from(score))
}

/// Print the report of a solving run
pub fn print_solve_report(report: &SolveReport) {
    banner(&format!("SIZE {}", report.size));

    println!(
        "\n{} ({}):",
        "Moves".bright_cyan().bold(),
        group_thousands(report.moves.len() as u64)
    );
    for mv in &report.moves {
        println!("{}", mv.to_string().bright_black());
    }

    println!("\n{}", "Board:".bright_cyan().bold());
    println!("{}", report.board);

    println!(
        "\nScore: {}",
        score_text(report.score).bright_yellow().bold()
    );
    println!("   Dictionary:  {} words", group_thousands(report.dictionary_size as u64));
    if let Some(seed) = report.seed {
        println!("   Shuffle seed: {seed}");
    }
    println!(
        "\nSolving for size {} took {}ms",
        report.size,
        format_millis(report.elapsed)
    );
}

/// Print whether a run replaced the stored record
pub fn print_record_outcome(size: usize, outcome: RecordOutcome) {
    match outcome {
        RecordOutcome::NewBest { previous } => println!(
            "{}",
            format!(
                "Found a new best for size {size} (previous {})",
                score_text(previous)
            )
            .green()
            .bold()
        ),
        RecordOutcome::Kept { best } => println!(
            "{}",
            format!("Best for size {size} stays at {}", score_text(best)).yellow()
        ),
    }
}

/// Print the outcome of replaying a move log
pub fn print_verify_report(report: &VerifyReport) {
    banner(&format!("VERIFIED SIZE {}", report.size));

    println!("\n{}", "Board:".bright_cyan().bold());
    println!("{}", report.board);
    println!(
        "\n{} moves replayed, score {}",
        group_thousands(report.moves as u64),
        score_text(report.score).bright_yellow().bold()
    );
}

/// Print one line per size of a batch run
pub fn print_batch_summary(entries: &[BatchEntry]) {
    banner("BATCH RESULTS");

    for entry in entries {
        let marker = match entry.outcome {
            Some(RecordOutcome::NewBest { .. }) => " new best".green().to_string(),
            _ => String::new(),
        };
        println!(
            "   {:>2}: {:>12}{marker}",
            entry.size,
            score_text(entry.score)
        );
    }

    let total: u64 = entries.iter().map(|entry| u64::from(entry.score)).sum();
    println!("\n   Total: {}", group_thousands(total).bright_yellow().bold());
}
