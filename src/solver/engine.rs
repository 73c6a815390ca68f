//! Main solver interface

use super::{fill, seeding};
use crate::core::{Board, BoardError};
use log::{debug, info};

/// Greedy two-phase solver
///
/// Drives a borrowed board: first seeds the multiplier bands, then sweeps the
/// rows top to bottom filling around whatever is already placed.
pub struct Solver<'b, 'w> {
    board: &'b mut Board<'w>,
}

impl<'b, 'w> Solver<'b, 'w> {
    /// Create a solver working on `board`
    ///
    /// The board is normally empty; a partly filled board is extended rather than
    /// cleared.
    pub const fn new(board: &'b mut Board<'w>) -> Self {
        Self { board }
    }

    /// Run both phases to completion and return the final board score
    ///
    /// # Errors
    /// Returns [`BoardError`] if a chosen move fails to apply, which means the
    /// evaluation and the commit disagree.
    pub fn solve(&mut self) -> Result<u32, BoardError> {
        self.solve_with(|_, _| {})
    }

    /// [`Solver::solve`], calling `on_row` with each row index and the board
    /// once that row has been filled
    ///
    /// # Errors
    /// See [`Solver::solve`].
    pub fn solve_with<F>(&mut self, mut on_row: F) -> Result<u32, BoardError>
    where
        F: FnMut(usize, &Board<'w>),
    {
        self.seed_multipliers()?;

        for y in 0..self.board.size() {
            self.fill_row(y)?;
            on_row(y, self.board);
        }

        info!(
            "solved {size}x{size}: {} moves, score {}",
            self.board.moves().len(),
            self.board.score(),
            size = self.board.size()
        );
        Ok(self.board.score())
    }

    /// Phase 1: lay a word along every multiplier band
    ///
    /// # Errors
    /// See [`Solver::solve`].
    pub fn seed_multipliers(&mut self) -> Result<(), BoardError> {
        seeding::seed_bands(self.board)?;
        debug!("seeding done at score {}", self.board.score());
        Ok(())
    }

    /// Phase 2 for a single row
    ///
    /// # Errors
    /// See [`Solver::solve`].
    pub fn fill_row(&mut self, y: usize) -> Result<(), BoardError> {
        fill::fill_row(self.board, y)
    }

    /// Read-only view of the board being solved
    #[must_use]
    pub fn board(&self) -> &Board<'w> {
        &*self.board
    }
}
