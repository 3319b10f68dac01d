// File: src/core/sorted.rs
use crate::core::lookup::{Lookup, Strategy};
use crate::core::signature::encode;
use crate::core::types::{is_query, WordEntry, WordSet};
use crate::dictionary::is_valid_word;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// (signature, word) pairs kept sorted by signature.
/// Exact queries are a binary search followed by a scan of the equal run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SortedIndex {
    entries: Vec<WordEntry>,
}

impl SortedIndex {
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<WordEntry> = words
            .into_iter()
            .filter(|w| is_valid_word(w.as_ref()))
            .map(|w| {
                let word = w.as_ref().to_string();
                WordEntry { signature: encode(&word), word }
            })
            .collect();
        entries.sort_unstable();
        info!(entries = entries.len(), "sorted index built");
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Lookup for SortedIndex {
    fn strategy(&self) -> Strategy {
        Strategy::Sorted
    }

    /// O(log n + k) where k is the number of entries sharing the signature.
    fn query(&self, signature: &str) -> WordSet {
        if !is_query(signature) {
            return WordSet::new();
        }
        // Lower bound of the run; equal entries are contiguous after sorting.
        let start = self
            .entries
            .partition_point(|e| e.signature.as_str() < signature);
        let words: WordSet = self.entries[start..]
            .iter()
            .take_while(|e| e.signature.as_str() == signature)
            .map(|e| e.word.clone())
            .collect();
        debug!(signature, hits = words.len(), "sorted query");
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SortedIndex {
        SortedIndex::build(["home", "gone", "good", "book", "cool", "hood", "in", "go"])
    }

    #[test]
    fn finds_every_word_of_a_run() {
        let index = sample();
        let words = index.query("4663");
        let expected: WordSet = ["home", "gone", "good", "hood"].iter().map(|s| s.to_string()).collect();
        assert_eq!(words, expected);
    }

    #[test]
    fn exact_only() {
        let index = sample();
        assert!(index.query("466").is_empty());
        assert_eq!(index.query("46").len(), 2);
    }

    #[test]
    fn runs_at_both_ends() {
        let index = sample();
        // "2665" sorts first and "4663" last among the sample signatures.
        assert_eq!(index.query("2665").len(), 2);
        assert_eq!(index.query("4663").len(), 4);
    }

    #[test]
    fn rejects_invalid_queries() {
        let index = sample();
        assert!(index.query("").is_empty());
        assert!(index.query("1").is_empty());
        assert!(index.query("abc").is_empty());
        assert!(index.query("46 3").is_empty());
    }

    #[test]
    fn skips_invalid_words() {
        let index = SortedIndex::build(["home", "Home", "can't", ""]);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn duplicates_collapse_in_the_result() {
        let index = SortedIndex::build(["home", "home"]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.query("4663").len(), 1);
    }
}
