//! Word-grid solving algorithms
//!
//! Phase 1 seeds the multiplier bands, phase 2 fills greedily around them.

mod engine;
pub mod fill;
pub mod seeding;

pub use engine::Solver;
