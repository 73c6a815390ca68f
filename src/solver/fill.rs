//! Greedy fill
//!
//! Visits each cell once in row-major order and, wherever the cell touches the
//! existing layout, plays the best word along each axis together with every
//! prefix of it that scores on its own.

use crate::core::{Axis, Board, BoardError, Move};
use rayon::prelude::*;

/// Whether `(x, y)` or one of its orthogonal neighbours holds a letter
#[must_use]
pub fn is_anchor(board: &Board<'_>, x: usize, y: usize) -> bool {
    let size = board.size();

    board.is_occupied(x, y)
        || (x > 0 && board.is_occupied(x - 1, y))
        || (x + 1 < size && board.is_occupied(x + 1, y))
        || (y > 0 && board.is_occupied(x, y - 1))
        || (y + 1 < size && board.is_occupied(x, y + 1))
}

/// Highest-scoring legal word at `(x, y)` along `axis`
///
/// Ties go to the word that comes first in dictionary order. Words scoring zero
/// are never picked.
#[must_use]
pub fn best_word<'w>(board: &Board<'w>, x: usize, y: usize, axis: Axis) -> Option<(&'w str, u32)> {
    let words = board.words().as_slice();

    words
        .par_iter()
        .enumerate()
        .filter_map(|(index, word)| {
            board
                .evaluate_word(x, y, axis, word)
                .filter(|&score| score > 0)
                .map(|score| (index, score))
        })
        .max_by(|(index_a, score_a), (index_b, score_b)| {
            score_a.cmp(score_b).then(index_b.cmp(index_a))
        })
        .map(|(index, score)| (words[index].as_str(), score))
}

/// Apply every prefix of `word` that is legal at the moment it is tried
///
/// Prefixes are tried shortest first, so a shorter word can score before the
/// longer one covering it. Returns the total score gained.
///
/// # Errors
/// Propagates [`BoardError`] from [`Board::apply`].
pub fn play_prefixes(
    board: &mut Board<'_>,
    x: usize,
    y: usize,
    axis: Axis,
    word: &str,
) -> Result<u32, BoardError> {
    let mut gained = 0;

    for end in 1..=word.len() {
        let prefix = &word[..end];
        if board.evaluate_word(x, y, axis, prefix).is_some() {
            gained += board.apply(Move::new(x, y, axis, prefix))?;
        }
    }

    Ok(gained)
}

/// Run the greedy fill over one row
///
/// # Errors
/// Propagates [`BoardError`] from [`Board::apply`].
pub fn fill_row(board: &mut Board<'_>, y: usize) -> Result<(), BoardError> {
    for x in 0..board.size() {
        if !is_anchor(board, x, y) {
            continue;
        }

        for axis in Axis::ALL {
            if let Some((word, _)) = best_word(board, x, y, axis) {
                play_prefixes(board, x, y, axis, word)?;
            }
        }
    }

    Ok(())
}
