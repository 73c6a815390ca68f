//! Command implementations

pub mod batch;
pub mod record;
pub mod solve;
pub mod verify;

pub use batch::{BatchEntry, DEFAULT_SIZES, run_batch};
pub use record::{RecordOutcome, RecordPaths, best_known_score, record_if_best};
pub use solve::{SolveConfig, SolveReport, solve_grid, solve_with_words};
pub use verify::{VerifyError, VerifyReport, verify_file, verify_log};
