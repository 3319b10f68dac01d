// File: src/dictionary.rs
//! Line-oriented word source feeding the index builders.
use crate::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// Default location of the word list, relative to the working directory.
pub const DEFAULT_DICTIONARY_PATH: &str = "assets/words";

/// A word is indexable when it is non-empty and made only of `a`-`z`.
pub fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}

/// Reads candidate words, one per line.
///
/// Lines are case-folded before validation, so `Hello` is accepted as `hello`.
/// Lines with any other character are skipped.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut skipped = 0usize;
    for line in reader.lines() {
        let line = line?;
        let word = line.trim_end_matches('\r').to_ascii_lowercase();
        if is_valid_word(&word) {
            words.push(word);
        } else {
            skipped += 1;
        }
    }
    info!(accepted = words.len(), skipped, "word source read");
    Ok(words)
}

pub fn load_words(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    info!(path = %path.display(), "loading word source");
    read_words(BufReader::new(file))
}
