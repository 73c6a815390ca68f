//! Placement and scoring engine
//!
//! The board owns the grid, the cumulative score, the ledger of every word ever
//! scored and the log of applied moves. All legality rules live here.
//!
//! Evaluation never writes to the grid. Tentative letters are read through an
//! overlay of the footprint being tested, so a rejected move has nothing to undo.

use super::moves::{Axis, Move};
use super::word_list::WordList;
use log::debug;
use rustc_hash::FxHashSet;
use std::fmt;

/// Rows and columns holding multiplier cells are this far apart
pub const MULTIPLIER_SPACING: usize = 5;

/// Factor applied to a word once per multiplier cell the move newly fills
pub const MULTIPLIER_FACTOR: u32 = 3;

/// Glyph for an empty cell
pub const EMPTY_GLYPH: char = '▢';

/// Glyph for an empty multiplier cell
pub const MULTIPLIER_GLYPH: char = '▣';

/// Whether `(x, y)` is a multiplier cell
#[inline]
#[must_use]
pub const fn is_multiplier(x: usize, y: usize) -> bool {
    x % MULTIPLIER_SPACING == 0 && y % MULTIPLIER_SPACING == 0
}

/// Points for a single letter: `a`..`j` are 0..9, then the cycle repeats
///
/// # Panics
/// Panics if `letter` is not a lowercase ASCII letter.
#[inline]
#[must_use]
pub fn letter_value(letter: u8) -> u32 {
    assert!(
        letter.is_ascii_lowercase(),
        "{:?} is not a lowercase letter",
        char::from(letter)
    );
    u32::from(letter - b'a') % 10
}

/// Why a move is not legal
///
/// Every variant collapses to the same Invalid result in [`Board::evaluate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("'{0}' is not in the dictionary")]
    NotInDictionary(String),
    #[error("move would form '{0}', which is not a word")]
    InvalidWord(String),
    #[error("words need at least 2 letters")]
    TooShort,
    #[error("word does not fit on the board")]
    OutOfBounds,
    #[error("word would extend an adjacent word")]
    Extends,
    #[error("letter conflict at ({x}, {y})")]
    Conflict { x: usize, y: usize },
    #[error("'{0}' has already been scored")]
    AlreadyPlayed(String),
    #[error("'{0}' would be scored twice by the same move")]
    Repeated(String),
}

/// Error returned by [`Board::apply`]
///
/// Applying an illegal move is a caller bug; the run that produced it should stop.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("illegal move {mv}")]
    IllegalMove {
        mv: Move,
        #[source]
        reason: Rejection,
    },
}

/// A letter at a coordinate
type Tile = (usize, usize, u8);

/// Letters a move would write, consulted before the grid
struct Overlay<'a> {
    x: usize,
    y: usize,
    axis: Axis,
    letters: &'a [u8],
}

impl Overlay<'_> {
    fn letter(&self, x: usize, y: usize) -> Option<u8> {
        let offset = match self.axis {
            Axis::Horizontal if y == self.y && x >= self.x => x - self.x,
            Axis::Vertical if x == self.x && y >= self.y => y - self.y,
            _ => return None,
        };
        self.letters.get(offset).copied()
    }
}

/// Outcome of a legal evaluation, kept so `apply` can commit it
struct Placement {
    score: u32,
    words: Vec<String>,
    fresh: Vec<Tile>,
}

/// Square word grid with score, ledger and move log
pub struct Board<'w> {
    size: usize,
    words: &'w WordList,
    cells: Vec<Option<u8>>,
    score: u32,
    moves: Vec<Move>,
    played: FxHashSet<String>,
}

impl<'w> Board<'w> {
    /// Create an empty `size`×`size` board scoring against `words`
    #[must_use]
    pub fn new(size: usize, words: &'w WordList) -> Self {
        Self {
            size,
            words,
            cells: vec![None; size * size],
            score: 0,
            moves: Vec::new(),
            played: FxHashSet::default(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// The dictionary this board scores against
    #[inline]
    #[must_use]
    pub const fn words(&self) -> &'w WordList {
        self.words
    }

    /// Sum of every word score counted so far
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Every applied move, in application order
    #[inline]
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Letter at `(x, y)`, or `None` when the cell is empty
    ///
    /// # Panics
    /// Panics if the coordinate is off the board.
    #[inline]
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<u8> {
        assert!(x < self.size && y < self.size, "({x}, {y}) is off the board");
        self.cells[self.index(x, y)]
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_some()
    }

    /// Number of cells holding a letter
    #[must_use]
    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Whether `word` has been scored anywhere on this board
    #[must_use]
    pub fn is_played(&self, word: &str) -> bool {
        self.played.contains(word)
    }

    /// Score `mv` would earn, or `None` if it is illegal
    ///
    /// Never changes the board.
    #[must_use]
    pub fn evaluate(&self, mv: &Move) -> Option<u32> {
        self.evaluate_word(mv.x(), mv.y(), mv.axis(), mv.word())
    }

    /// [`Board::evaluate`] without building a [`Move`]
    #[must_use]
    pub fn evaluate_word(&self, x: usize, y: usize, axis: Axis, word: &str) -> Option<u32> {
        self.placement(x, y, axis, word)
            .ok()
            .map(|placement| placement.score)
    }

    /// Score `mv` would earn, or the rule it breaks
    ///
    /// # Errors
    /// Returns the first [`Rejection`] encountered.
    pub fn check(&self, mv: &Move) -> Result<u32, Rejection> {
        self.placement(mv.x(), mv.y(), mv.axis(), mv.word())
            .map(|placement| placement.score)
    }

    /// Commit `mv` and return the score it earned
    ///
    /// # Errors
    /// Returns [`BoardError::IllegalMove`] if the move is not legal; the board is
    /// left untouched in that case.
    pub fn apply(&mut self, mv: Move) -> Result<u32, BoardError> {
        let placement = match self.placement(mv.x(), mv.y(), mv.axis(), mv.word()) {
            Ok(placement) => placement,
            Err(reason) => return Err(BoardError::IllegalMove { mv, reason }),
        };

        for (x, y, letter) in placement.fresh {
            let index = self.index(x, y);
            self.cells[index] = Some(letter);
        }
        self.played.extend(placement.words);
        self.score += placement.score;

        debug!("applied {mv} for {} (total {})", placement.score, self.score);
        self.moves.push(mv);

        Ok(placement.score)
    }

    #[inline]
    const fn index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    fn letter(&self, x: usize, y: usize, overlay: &Overlay<'_>) -> Option<u8> {
        overlay.letter(x, y).or(self.cells[self.index(x, y)])
    }

    fn placement(&self, x: usize, y: usize, axis: Axis, word: &str) -> Result<Placement, Rejection> {
        if !self.words.contains(word) {
            return Err(Rejection::NotInDictionary(word.to_string()));
        }

        let letters = word.as_bytes();
        if letters.len() < 2 {
            return Err(Rejection::TooShort);
        }

        let (dx, dy) = axis.step();
        let (along, across) = match axis {
            Axis::Horizontal => (x, y),
            Axis::Vertical => (y, x),
        };
        if across >= self.size || along >= self.size || letters.len() > self.size - along {
            return Err(Rejection::OutOfBounds);
        }
        let end = along + letters.len();

        // Flanking cells must be empty or the word would run into a neighbour
        if along > 0 && self.is_occupied(x - dx, y - dy) {
            return Err(Rejection::Extends);
        }
        if end < self.size && self.is_occupied(x + dx * letters.len(), y + dy * letters.len()) {
            return Err(Rejection::Extends);
        }

        let mut fresh: Vec<Tile> = Vec::with_capacity(letters.len());
        for (i, &letter) in letters.iter().enumerate() {
            let (cx, cy) = (x + dx * i, y + dy * i);
            match self.cells[self.index(cx, cy)] {
                None => fresh.push((cx, cy, letter)),
                Some(existing) if existing != letter => {
                    return Err(Rejection::Conflict { x: cx, y: cy });
                }
                Some(_) => {}
            }
        }

        let mut counted = Vec::new();
        let mut score = 0;

        let cross = axis.flipped();
        for &(cx, cy, letter) in &fresh {
            let overlay = Overlay {
                x: cx,
                y: cy,
                axis,
                letters: std::slice::from_ref(&letter),
            };
            let run = self.run_through(cx, cy, cross, &overlay);
            score += self.score_run(&run, &fresh, &mut counted)?;
        }

        let overlay = Overlay {
            x,
            y,
            axis,
            letters,
        };
        let run = self.run_through(x, y, axis, &overlay);
        score += self.score_run(&run, &fresh, &mut counted)?;

        Ok(Placement {
            score,
            words: counted,
            fresh,
        })
    }

    /// The maximal run of letters through `(x, y)` along `axis`
    fn run_through(&self, x: usize, y: usize, axis: Axis, overlay: &Overlay<'_>) -> Vec<Tile> {
        let (dx, dy) = axis.step();

        let (mut cx, mut cy) = (x, y);
        while cx >= dx && cy >= dy && self.letter(cx - dx, cy - dy, overlay).is_some() {
            cx -= dx;
            cy -= dy;
        }

        let mut run = Vec::new();
        while cx < self.size && cy < self.size {
            let Some(letter) = self.letter(cx, cy, overlay) else {
                break;
            };
            run.push((cx, cy, letter));
            cx += dx;
            cy += dy;
        }
        run
    }

    /// Score one formed word, recording it in `counted`
    ///
    /// Single letters score nothing. Every multiplier cell in the run that the
    /// outer move fills for the first time multiplies the word score.
    fn score_run(&self, run: &[Tile], fresh: &[Tile], counted: &mut Vec<String>) -> Result<u32, Rejection> {
        if run.len() < 2 {
            return Ok(0);
        }

        let word: String = run.iter().map(|&(_, _, letter)| char::from(letter)).collect();
        if !self.words.contains(&word) {
            return Err(Rejection::InvalidWord(word));
        }
        if self.played.contains(&word) {
            return Err(Rejection::AlreadyPlayed(word));
        }
        if counted.contains(&word) {
            return Err(Rejection::Repeated(word));
        }

        let mut score: u32 = run.iter().map(|&(_, _, letter)| letter_value(letter)).sum();
        for &(cx, cy, _) in run {
            if is_multiplier(cx, cy) && fresh.iter().any(|&(fx, fy, _)| fx == cx && fy == cy) {
                score *= MULTIPLIER_FACTOR;
            }
        }

        counted.push(word);
        Ok(score)
    }

    fn glyph(&self, x: usize, y: usize) -> char {
        match (self.cell(x, y), is_multiplier(x, y)) {
            (None, true) => MULTIPLIER_GLYPH,
            (None, false) => EMPTY_GLYPH,
            (Some(letter), true) => char::from(letter.to_ascii_uppercase()),
            (Some(letter), false) => char::from(letter),
        }
    }
}

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wide = self.size > 10;

        write!(f, " ")?;
        if wide {
            write!(f, " ")?;
        }
        for x in 0..self.size {
            if x < 10 {
                write!(f, " ")?;
            }
            write!(f, "{x}")?;
            if x + 1 != self.size {
                write!(f, " ")?;
            }
        }
        writeln!(f)?;

        for y in 0..self.size {
            if wide && y < 10 {
                write!(f, " ")?;
            }
            write!(f, "{y}")?;

            for x in 0..self.size {
                write!(f, " {}", self.glyph(x, y))?;
                if x + 1 != self.size {
                    write!(f, " ")?;
                }
            }

            if y + 1 != self.size {
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DICTIONARY: &[&str] = &[
        "pro", "prodrive", "awesome", "online", "contest", "amazing", "an", "prod", "kat", "ijs",
        "ja", "ij", "tr", "tri", "a", "mo", "ma",
    ];

    fn dictionary() -> WordList {
        WordList::from_lines(DICTIONARY, usize::MAX)
    }

    fn oriented(mv: Move, transpose: bool) -> Move {
        if transpose { mv.transpose() } else { mv }
    }

    fn play(board: &mut Board<'_>, mv: Move, transpose: bool) -> u32 {
        board.apply(oriented(mv, transpose)).unwrap()
    }

    fn score_of(board: &Board<'_>, mv: Move, transpose: bool) -> Option<u32> {
        board.evaluate(&oriented(mv, transpose))
    }

    fn opening() -> [Move; 5] {
        [
            Move::new(2, 4, Axis::Vertical, "pro"),
            Move::new(2, 4, Axis::Vertical, "prodrive"),
            Move::new(0, 11, Axis::Horizontal, "awesome"),
            Move::new(6, 6, Axis::Vertical, "online"),
            Move::new(4, 7, Axis::Horizontal, "contest"),
        ]
    }

    fn amazing() -> Move {
        Move::new(5, 10, Axis::Vertical, "amazing")
    }

    #[test]
    fn new_board_is_empty() {
        let words = dictionary();
        let board = Board::new(5, &words);

        assert_eq!(board.size(), 5);
        assert_eq!(board.score(), 0);
        assert!(board.moves().is_empty());
        assert_eq!(board.filled_cells(), 0);
        assert_eq!(board.cell(0, 0), None);
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn cell_panics_off_board() {
        let words = dictionary();
        let board = Board::new(5, &words);
        let _ = board.cell(5, 0);
    }

    #[test]
    fn apply_logs_moves_in_order() {
        let words = dictionary();
        let mut board = Board::new(17, &words);

        for mv in opening() {
            board.apply(mv).unwrap();
        }
        board.apply(amazing()).unwrap();

        let log: Vec<String> = board.moves().iter().map(ToString::to_string).collect();
        assert_eq!(
            log,
            vec![
                "4,2,V,pro",
                "4,2,V,prodrive",
                "11,0,H,awesome",
                "6,6,V,online",
                "7,4,H,contest",
                "10,5,V,amazing",
            ]
        );
    }

    #[test]
    fn apply_accumulates_score() {
        for transpose in [false, true] {
            let words = dictionary();
            let mut board = Board::new(17, &words);
            let expected = [16, 55, 79, 102, 141];

            for (mv, total) in opening().into_iter().zip(expected) {
                play(&mut board, mv, transpose);
                assert_eq!(board.score(), total, "transpose = {transpose}");
            }

            play(&mut board, amazing(), transpose);
            assert_eq!(board.score(), 366, "transpose = {transpose}");
        }
    }

    #[test]
    fn evaluate_scores_only_new_words() {
        for transpose in [false, true] {
            let words = dictionary();
            let mut board = Board::new(17, &words);
            let expected = [16, 39, 24, 23, 39];

            for (mv, score) in opening().into_iter().zip(expected) {
                assert_eq!(score_of(&board, mv.clone(), transpose), Some(score));
                play(&mut board, mv, transpose);
            }

            assert_eq!(score_of(&board, amazing(), transpose), Some(225));
        }
    }

    #[test]
    fn evaluate_leaves_board_untouched() {
        for transpose in [false, true] {
            let words = dictionary();
            let mut board = Board::new(17, &words);
            for mv in opening() {
                play(&mut board, mv, transpose);
            }
            let before = board.to_string();

            assert_eq!(score_of(&board, amazing(), transpose), Some(225));

            assert_eq!(board.score(), 141);
            assert_eq!(board.moves().len(), 5);
            assert_eq!(board.to_string(), before);
            assert!(!board.is_played("amazing"));
            assert!(!board.is_played("an"));
        }
    }

    #[test]
    fn crossing_words_enter_ledger() {
        let words = dictionary();
        let mut board = Board::new(17, &words);
        for mv in opening() {
            board.apply(mv).unwrap();
        }

        assert_eq!(board.apply(amazing()).unwrap(), 225);
        assert!(board.is_played("amazing"));
        assert!(board.is_played("an"));
    }

    #[test]
    fn applied_move_cannot_score_again() {
        let words = dictionary();
        let mut board = Board::new(17, &words);

        for mv in opening() {
            board.apply(mv.clone()).unwrap();
            assert_eq!(board.evaluate(&mv), None, "{mv} scored twice");
        }
    }

    #[test]
    fn multipliers_apply_only_to_new_cells() {
        for transpose in [false, true] {
            let words = dictionary();
            let mut board = Board::new(17, &words);

            let tr = Move::new(0, 0, Axis::Horizontal, "tr");
            assert_eq!(score_of(&board, tr.clone(), transpose), Some(48));
            play(&mut board, tr, transpose);

            let tri = Move::new(0, 0, Axis::Horizontal, "tri");
            assert_eq!(score_of(&board, tri, transpose), Some(24));
        }
    }

    #[test]
    fn rejects_move_running_into_existing_word() {
        for transpose in [false, true] {
            let words = dictionary();
            let mut board = Board::new(17, &words);
            for mv in opening() {
                play(&mut board, mv, transpose);
            }

            let mv = oriented(Move::new(3, 4, Axis::Vertical, "amazing"), transpose);
            assert_eq!(board.evaluate(&mv), None);
            assert_eq!(board.check(&mv), Err(Rejection::Extends));
            assert!(board.apply(mv).is_err());
            assert_eq!(board.score(), 141);
        }
    }

    #[test]
    fn rejects_invalid_crossing_word() {
        let words = WordList::from_lines(["pro", "ox"], usize::MAX);
        let mut board = Board::new(6, &words);
        board.apply(Move::new(0, 0, Axis::Horizontal, "pro")).unwrap();

        let mv = Move::new(0, 1, Axis::Horizontal, "ox");
        assert_eq!(board.check(&mv), Err(Rejection::InvalidWord("po".to_string())));
        assert!(board.apply(mv).is_err());
        assert_eq!(board.filled_cells(), 3);
    }

    #[test]
    fn rejects_word_played_before() {
        for transpose in [false, true] {
            let words = dictionary();
            let mut board = Board::new(17, &words);
            for mv in opening() {
                play(&mut board, mv, transpose);
            }
            play(&mut board, amazing(), transpose);

            let mv = oriented(Move::new(0, 11, Axis::Vertical, "an"), transpose);
            assert_eq!(board.check(&mv), Err(Rejection::AlreadyPlayed("an".to_string())));
            assert!(board.apply(mv).is_err());
            assert_eq!(board.score(), 366);
        }
    }

    #[test]
    fn rejects_word_inside_longer_word() {
        for transpose in [false, true] {
            let words = dictionary();
            let mut board = Board::new(17, &words);
            play(&mut board, Move::new(2, 4, Axis::Vertical, "pro"), transpose);
            play(&mut board, Move::new(2, 4, Axis::Vertical, "prodrive"), transpose);

            let prod = oriented(Move::new(2, 4, Axis::Vertical, "prod"), transpose);
            assert_eq!(board.evaluate(&prod), None);
            assert_eq!(board.check(&prod), Err(Rejection::Extends));

            let err = board.apply(prod).unwrap_err();
            assert!(matches!(
                err,
                BoardError::IllegalMove {
                    reason: Rejection::Extends,
                    ..
                }
            ));
        }
    }

    #[test]
    fn rejects_occupied_flank_even_when_letters_match() {
        let words = WordList::from_lines(["pro", "ro", "pr"], usize::MAX);
        let mut board = Board::new(6, &words);
        board.apply(Move::new(1, 1, Axis::Horizontal, "pro")).unwrap();

        // "ro" matches the grid letters but the 'p' before it is occupied
        assert_eq!(
            board.check(&Move::new(2, 1, Axis::Horizontal, "ro")),
            Err(Rejection::Extends)
        );
        // "pr" matches too but the 'o' after it is occupied
        assert_eq!(
            board.check(&Move::new(1, 1, Axis::Horizontal, "pr")),
            Err(Rejection::Extends)
        );
    }

    #[test]
    fn rejects_overlap_with_different_letters() {
        for transpose in [false, true] {
            let words = dictionary();
            let mut board = Board::new(17, &words);
            play(&mut board, Move::new(2, 4, Axis::Vertical, "pro"), transpose);

            let kat = oriented(Move::new(2, 4, Axis::Vertical, "kat"), transpose);
            let (x, y) = (kat.x(), kat.y());
            assert_eq!(board.check(&kat), Err(Rejection::Conflict { x, y }));
            assert!(board.apply(kat).is_err());
        }
    }

    #[test]
    fn rejects_same_word_formed_twice() {
        for transpose in [false, true] {
            let words = dictionary();
            let mut board = Board::new(17, &words);
            play(&mut board, Move::new(0, 0, Axis::Vertical, "ijs"), transpose);

            let ja = oriented(Move::new(1, 0, Axis::Vertical, "ja"), transpose);
            assert_eq!(board.check(&ja), Err(Rejection::Repeated("ja".to_string())));
            assert!(board.apply(ja).is_err());
        }
    }

    #[test]
    fn rejects_move_off_the_board() {
        for transpose in [false, true] {
            let words = dictionary();
            let board = Board::new(17, &words);

            let mv = oriented(Move::new(15, 15, Axis::Vertical, "ijs"), transpose);
            assert_eq!(board.check(&mv), Err(Rejection::OutOfBounds));

            let mv = oriented(Move::new(17, 0, Axis::Vertical, "ijs"), transpose);
            assert_eq!(board.check(&mv), Err(Rejection::OutOfBounds));
        }
    }

    #[test]
    fn rejects_anchor_at_the_end_of_the_coordinate_range() {
        for transpose in [false, true] {
            let words = dictionary();
            let mut board = Board::new(17, &words);

            for mv in [
                Move::new(usize::MAX, 0, Axis::Horizontal, "ij"),
                Move::new(0, usize::MAX, Axis::Vertical, "ij"),
                Move::new(usize::MAX, usize::MAX, Axis::Horizontal, "ij"),
            ] {
                let mv = oriented(mv, transpose);
                assert_eq!(board.evaluate(&mv), None);
                assert_eq!(board.check(&mv), Err(Rejection::OutOfBounds));
                assert!(board.apply(mv).is_err());
            }
            assert!(board.moves().is_empty());
        }
    }

    #[test]
    fn rejects_single_letters_everywhere() {
        let words = dictionary();
        let board = Board::new(6, &words);

        for y in 0..6 {
            for x in 0..6 {
                for axis in Axis::ALL {
                    let mv = Move::new(x, y, axis, "a");
                    assert_eq!(board.check(&mv), Err(Rejection::TooShort));
                }
            }
        }
    }

    #[test]
    fn rejects_unknown_words() {
        let words = dictionary();
        let mut board = Board::new(17, &words);

        let mv = Move::new(0, 0, Axis::Horizontal, "zzz");
        assert_eq!(board.check(&mv), Err(Rejection::NotInDictionary("zzz".to_string())));
        assert!(board.apply(mv).is_err());
        assert_eq!(board.score(), 0);
        assert!(board.moves().is_empty());
    }

    #[test]
    fn letter_values_cycle_every_ten_letters() {
        assert_eq!(letter_value(b'a'), 0);
        assert_eq!(letter_value(b'j'), 9);
        assert_eq!(letter_value(b'k'), 0);
        assert_eq!(letter_value(b't'), 9);
        assert_eq!(letter_value(b'u'), 0);
        assert_eq!(letter_value(b'z'), 5);
    }

    #[test]
    #[should_panic(expected = "not a lowercase letter")]
    fn letter_value_panics_below_lowercase() {
        let _ = letter_value(b'A');
    }

    #[test]
    #[should_panic(expected = "not a lowercase letter")]
    fn letter_value_panics_above_lowercase() {
        let _ = letter_value(b'{');
    }

    #[test]
    fn multiplier_lattice() {
        assert!(is_multiplier(0, 0));
        assert!(is_multiplier(5, 10));
        assert!(!is_multiplier(5, 3));
        assert!(!is_multiplier(1, 0));
    }

    #[test]
    fn display_renders_readable_board() {
        let words = WordList::default();
        let mut board = Board::new(6, &words);
        for (i, letter) in b"abcdef".iter().enumerate() {
            let index = board.index(i, i);
            board.cells[index] = Some(*letter);
        }

        let expected = [
            "  0  1  2  3  4  5",
            "0 A  ▢  ▢  ▢  ▢  ▣",
            "1 ▢  b  ▢  ▢  ▢  ▢",
            "2 ▢  ▢  c  ▢  ▢  ▢",
            "3 ▢  ▢  ▢  d  ▢  ▢",
            "4 ▢  ▢  ▢  ▢  e  ▢",
            "5 ▣  ▢  ▢  ▢  ▢  F",
        ]
        .join("\n");

        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn display_pads_labels_on_wide_boards() {
        let words = WordList::default();
        let board = Board::new(11, &words);
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 12);
        assert!(lines[0].starts_with("   0  1"));
        assert!(lines[0].ends_with(" 9 10"));
        assert!(lines[1].starts_with(" 0 ▣  ▢"));
        assert!(lines[11].starts_with("10 ▣"));
    }
}
