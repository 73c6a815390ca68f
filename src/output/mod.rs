//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_batch_summary, print_record_outcome, print_solve_report, print_verify_report,
};
