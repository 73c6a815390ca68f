//! Word-Grid Solver
//!
//! Greedy placement of dictionary words on a square grid. Letters score by
//! position in the alphabet modulo 10, and multiplier cells every five rows and
//! columns triple the words that newly cover them.
//!
//! # Quick Start
//!
//! ```rust
//! use wordgrid_solver::core::{Axis, Board, Move, WordList};
//! use wordgrid_solver::solver::Solver;
//!
//! let words = WordList::from_lines(["tr", "tri", "trio"], 6);
//! let mut board = Board::new(6, &words);
//!
//! // "tr" covers the origin multiplier: (9 + 7) * 3
//! assert_eq!(board.evaluate(&Move::new(0, 0, Axis::Horizontal, "tr")), Some(48));
//!
//! let score = Solver::new(&mut board).solve().unwrap();
//! println!("Score: {score}\n{board}");
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
