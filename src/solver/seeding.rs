//! Multiplier seeding
//!
//! Lays one high-scoring word along each multiplier row, tying every row to the
//! one above it with a five-letter vertical connector.

use crate::core::{Axis, Board, BoardError, MULTIPLIER_SPACING, Move};
use log::{debug, info};
use rayon::prelude::*;

/// Length of the vertical words that link consecutive bands
pub const CONNECTOR_LENGTH: usize = 5;

/// Number of multiplier rows on a board of `size`
#[must_use]
pub const fn band_count(size: usize) -> usize {
    if size == 0 {
        0
    } else {
        (size - 1) / MULTIPLIER_SPACING + 1
    }
}

/// Every word that is legal horizontally at the origin, best first
///
/// Equal scores keep dictionary order.
#[must_use]
pub fn rank_openers<'w>(board: &Board<'w>) -> Vec<(&'w str, u32)> {
    let mut ranked: Vec<(&'w str, u32)> = board
        .words()
        .as_slice()
        .par_iter()
        .filter_map(|word| {
            board
                .evaluate_word(0, 0, Axis::Horizontal, word)
                .map(|score| (word.as_str(), score))
        })
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Highest-scoring connector that lets `candidate` be laid on the band below
/// `previous_row`
///
/// A connector hangs from a letter already on `previous_row`; appending the
/// candidate's letter in that column must give another dictionary word, itself
/// legal in place. Earlier columns and dictionary order win ties.
#[must_use]
pub fn best_connector(
    board: &Board<'_>,
    connectors: &[&str],
    candidate: &str,
    previous_row: usize,
) -> Option<Move> {
    let words = board.words();
    let mut best: Option<(Move, u32)> = None;

    for (column, end) in candidate.bytes().enumerate().take(board.size()) {
        let Some(start) = board.cell(column, previous_row) else {
            continue;
        };

        for &connector in connectors {
            if connector.as_bytes().first() != Some(&start) || connector == candidate {
                continue;
            }

            let mut bridged = String::with_capacity(connector.len() + 1);
            bridged.push_str(connector);
            bridged.push(char::from(end));
            if bridged == candidate || !words.contains(&bridged) {
                continue;
            }

            let Some(score) = board.evaluate_word(column, previous_row, Axis::Vertical, connector)
            else {
                continue;
            };
            if best.as_ref().map_or(0, |(_, best_score)| *best_score) >= score {
                continue;
            }
            if board
                .evaluate_word(column, previous_row, Axis::Vertical, &bridged)
                .is_none()
            {
                continue;
            }

            best = Some((Move::new(column, previous_row, Axis::Vertical, connector), score));
        }
    }

    best.map(|(mv, _)| mv)
}

/// Fill every multiplier band, top to bottom
///
/// Band 0 takes the best opener outright. Each later band takes the first
/// remaining opener that has a connector to the band above; openers tried and
/// rejected are not offered to later bands. A band nothing connects to stays empty.
///
/// # Errors
/// Propagates [`BoardError`] if a chosen move turns out to be illegal.
pub fn seed_bands(board: &mut Board<'_>) -> Result<(), BoardError> {
    let ranked = rank_openers(board);
    let connectors = board.words().words_of_length(CONNECTOR_LENGTH);
    let bands = band_count(board.size());

    info!(
        "seeding {bands} bands from {} openers and {} connectors",
        ranked.len(),
        connectors.len()
    );

    let mut openers = ranked.into_iter().map(|(word, _)| word);

    for band in 0..bands {
        let row = band * MULTIPLIER_SPACING;

        if band == 0 {
            if let Some(opener) = openers.next() {
                board.apply(Move::new(0, row, Axis::Horizontal, opener))?;
            }
            continue;
        }

        let previous_row = row - MULTIPLIER_SPACING;
        let mut filled = false;

        for opener in openers.by_ref() {
            if board.is_played(opener) {
                continue;
            }

            if let Some(connector) = best_connector(board, &connectors, opener, previous_row) {
                board.apply(connector)?;
                board.apply(Move::new(0, row, Axis::Horizontal, opener))?;
                filled = true;
                break;
            }
        }

        if !filled {
            debug!("band {band} (row {row}) left empty");
        }
    }

    Ok(())
}
