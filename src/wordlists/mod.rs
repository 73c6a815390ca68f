//! Dictionary sources
//!
//! Word lists are plain text, one word per line, read once at startup.

pub mod loader;

pub use loader::{WordListError, load_from_file, words_from_slice};
