//! Dictionary membership oracle
//!
//! A `WordList` is built once from a stream of tokens and never changes afterwards,
//! except for the iteration order, which can be shuffled before solving starts.

use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;

/// Fixed vocabulary of lowercase ASCII words
///
/// Membership is an O(1) hash lookup. Iteration yields every word exactly once,
/// in lexicographic order unless [`WordList::shuffle`] was called.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl WordList {
    /// Build a word list from line-delimited tokens
    ///
    /// Tokens are trimmed; blank tokens, tokens longer than `max_length` and tokens
    /// with anything other than `a-z` are skipped. Duplicates collapse to one entry.
    ///
    /// # Examples
    /// ```
    /// use wordgrid_solver::core::WordList;
    ///
    /// let words = WordList::from_lines(["w", "wo", "wor", "word", "words"], 3);
    /// assert_eq!(words.len(), 3);
    /// assert!(words.contains("wor"));
    /// assert!(!words.contains("word"));
    /// ```
    pub fn from_lines<I, S>(lines: I, max_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();

        for line in lines {
            let token = line.as_ref().trim();
            if token.is_empty()
                || token.len() > max_length
                || !token.bytes().all(|b| b.is_ascii_lowercase())
            {
                continue;
            }

            if list.index.insert(token.to_string()) {
                list.words.push(token.to_string());
            }
        }

        list.words.sort_unstable();
        list
    }

    /// Check whether `word` is in the vocabulary
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Number of words in the vocabulary
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over every word once, in the current iteration order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// The vocabulary as a slice, in the current iteration order
    ///
    /// Positions in this slice are the tie-break order used by the solver.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Every word of exactly `length` letters, in iteration order
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Vec<&str> {
        self.iter().filter(|word| word.len() == length).collect()
    }

    /// Reorder iteration; membership is unaffected
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.words.shuffle(rng);
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.words
            .iter()
            .map(String::as_str as fn(&'a String) -> &'a str)
    }
}
