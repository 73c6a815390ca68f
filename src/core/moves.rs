//! Move representation
//!
//! A move names an anchor cell, the axis the word runs along, and the word itself.
//! Its `Display` form is the submission line `row,col,axis,word`.

use std::fmt;
use std::str::FromStr;

/// Direction a word is laid along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Both axes in the order the solver tries them
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Single-letter identifier used in move logs
    #[must_use]
    pub const fn identifier(self) -> char {
        match self {
            Self::Horizontal => 'H',
            Self::Vertical => 'V',
        }
    }

    /// Parse a move-log identifier
    #[must_use]
    pub const fn from_identifier(identifier: char) -> Option<Self> {
        match identifier {
            'H' => Some(Self::Horizontal),
            'V' => Some(Self::Vertical),
            _ => None,
        }
    }

    /// The perpendicular axis
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Unit step `(dx, dy)` along this axis
    #[inline]
    #[must_use]
    pub const fn step(self) -> (usize, usize) {
        match self {
            Self::Horizontal => (1, 0),
            Self::Vertical => (0, 1),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

/// A word placed at an anchor along an axis
///
/// Moves are plain values: whether one is legal is decided by the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    x: usize,
    y: usize,
    axis: Axis,
    word: String,
}

impl Move {
    /// Create a move anchored at column `x`, row `y`
    ///
    /// # Examples
    /// ```
    /// use wordgrid_solver::core::{Axis, Move};
    ///
    /// let mv = Move::new(2, 4, Axis::Vertical, "prodrive");
    /// assert_eq!(mv.to_string(), "4,2,V,prodrive");
    /// ```
    pub fn new(x: usize, y: usize, axis: Axis, word: impl Into<String>) -> Self {
        Self {
            x,
            y,
            axis,
            word: word.into(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn x(&self) -> usize {
        self.x
    }

    #[inline]
    #[must_use]
    pub const fn y(&self) -> usize {
        self.y
    }

    #[inline]
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Mirror the move across the main diagonal
    ///
    /// Swaps the anchor coordinates and flips the axis; the word is unchanged.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            x: self.y,
            y: self.x,
            axis: self.axis.flipped(),
            word: self.word.clone(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.y, self.x, self.axis, self.word)
    }
}

/// Error type for malformed move-log lines
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    #[error("expected 4 comma-separated fields, got {0}")]
    FieldCount(usize),
    #[error("invalid coordinate '{0}'")]
    InvalidCoordinate(String),
    #[error("invalid axis '{0}', expected H or V")]
    InvalidAxis(String),
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse a `row,col,axis,word` line
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.trim().splitn(4, ',').collect();
        let [row, col, axis, word] = fields.as_slice() else {
            return Err(MoveParseError::FieldCount(fields.len()));
        };

        let coordinate = |field: &str| {
            field
                .trim()
                .parse::<usize>()
                .map_err(|_| MoveParseError::InvalidCoordinate(field.to_string()))
        };
        let y = coordinate(*row)?;
        let x = coordinate(*col)?;

        let mut identifier = axis.trim().chars();
        let axis = match (identifier.next(), identifier.next()) {
            (Some(c), None) => Axis::from_identifier(c),
            _ => None,
        }
        .ok_or_else(|| MoveParseError::InvalidAxis((*axis).to_string()))?;

        Ok(Self::new(x, y, axis, word.trim()))
    }
}
