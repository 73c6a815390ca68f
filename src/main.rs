//! Word-grid solver - CLI
//!
//! Fills square word grids greedily and keeps the best score found per size.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordgrid_solver::{
    commands::{
        DEFAULT_SIZES, RecordPaths, SolveConfig, record_if_best, run_batch, solve_grid,
        verify_file,
    },
    output::{print_batch_summary, print_record_outcome, print_solve_report, print_verify_report},
};

#[derive(Parser)]
#[command(
    name = "wordgrid_solver",
    about = "Greedy word-grid solver with multiplier seeding",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line
    #[arg(short, long, global = true, default_value = "wordlist.txt")]
    dictionary: PathBuf,

    /// Longest word to load (default: the board size)
    #[arg(long, global = true)]
    max_length: Option<usize>,

    /// Shuffle the dictionary order with this seed
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Directory holding the best report per size
    #[arg(long, global = true, default_value = "results")]
    results_dir: PathBuf,

    /// README whose score table is updated on a new best
    #[arg(long, global = true, default_value = "README.md")]
    readme: PathBuf,

    /// Do not store improved scores
    #[arg(long, global = true)]
    no_record: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a single board size
    Solve {
        /// Board width and height
        size: usize,
    },

    /// Solve every size in a range (default when no command is given)
    Batch {
        /// First size
        #[arg(long, default_value_t = *DEFAULT_SIZES.start())]
        from: usize,

        /// Last size, inclusive
        #[arg(long, default_value_t = *DEFAULT_SIZES.end())]
        to: usize,
    },

    /// Replay a move log and report its score
    Verify {
        /// Board width and height
        size: usize,

        /// File with one `row,col,axis,word` move per line
        log: PathBuf,
    },
}

impl Cli {
    fn config(&self, size: usize) -> SolveConfig {
        SolveConfig {
            max_word_length: self.max_length,
            shuffle_seed: self.seed,
            ..SolveConfig::new(size, &self.dictionary)
        }
    }

    fn record_paths(&self) -> Option<RecordPaths> {
        (!self.no_record).then(|| RecordPaths {
            results_dir: self.results_dir.clone(),
            readme: self.readme.clone(),
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut cli = Cli::parse();

    let command = cli.command.take().unwrap_or(Commands::Batch {
        from: *DEFAULT_SIZES.start(),
        to: *DEFAULT_SIZES.end(),
    });

    match command {
        Commands::Solve { size } => run_solve_command(&cli, size),
        Commands::Batch { from, to } => run_batch_command(&cli, from, to),
        Commands::Verify { size, log } => run_verify_command(&cli, size, &log),
    }
}

fn run_solve_command(cli: &Cli, size: usize) -> Result<()> {
    let report = solve_grid(&cli.config(size))?;
    print_solve_report(&report);

    if let Some(paths) = cli.record_paths() {
        let outcome = record_if_best(&report, &paths)?;
        print_record_outcome(size, outcome);
    }
    Ok(())
}

fn run_batch_command(cli: &Cli, from: usize, to: usize) -> Result<()> {
    let paths = cli.record_paths();
    let entries = run_batch(&cli.config(from), from, to, paths.as_ref())?;
    print_batch_summary(&entries);
    Ok(())
}

fn run_verify_command(cli: &Cli, size: usize, log: &Path) -> Result<()> {
    let report = verify_file(&cli.config(size), log)?;
    print_verify_report(&report);
    Ok(())
}
