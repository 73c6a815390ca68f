//! Word list loading utilities

use crate::core::WordList;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Failure to read a dictionary file
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("failed to read word list {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load a dictionary from a file, keeping words of at most `max_length` letters
///
/// Lines are trimmed; blank lines and lines that are not plain lowercase words
/// are skipped.
///
/// # Errors
///
/// Returns [`WordListError::Read`] if the file cannot be opened or is not UTF-8.
///
/// # Examples
/// ```no_run
/// use wordgrid_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordlist.txt", 11).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, max_length: usize) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(WordList::from_lines(content.lines(), max_length))
}

/// Build a dictionary from an in-memory slice
///
/// # Examples
/// ```
/// use wordgrid_solver::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["table", "tabled", "dot"], 5);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], max_length: usize) -> WordList {
    WordList::from_lines(slice, max_length)
}
