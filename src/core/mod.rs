//! Core domain types for word-grid placement
//!
//! The dictionary, the move value type and the board engine that scores moves.
//! Nothing in here prints or touches the filesystem.

mod board;
mod moves;
mod word_list;

pub use board::{
    Board, BoardError, EMPTY_GLYPH, MULTIPLIER_FACTOR, MULTIPLIER_GLYPH, MULTIPLIER_SPACING,
    Rejection, is_multiplier, letter_value,
};
pub use moves::{Axis, Move, MoveParseError};
pub use word_list::WordList;
