// File: src/core/scan.rs
use crate::core::lookup::{Lookup, Strategy};
use crate::core::signature::encode;
use crate::core::types::{is_query, WordSet};
use crate::dictionary::is_valid_word;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Plain word list answering exact queries by encoding every word.
/// Slow, but trivially correct; the other strategies are checked against it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanIndex {
    words: Vec<String>,
}

impl ScanIndex {
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .filter(|w| is_valid_word(w.as_ref()))
            .map(|w| w.as_ref().to_string())
            .collect();
        info!(words = words.len(), "scan index built");
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Lookup for ScanIndex {
    fn strategy(&self) -> Strategy {
        Strategy::Scan
    }

    fn query(&self, signature: &str) -> WordSet {
        if !is_query(signature) {
            return WordSet::new();
        }
        let words: WordSet = self
            .words
            .iter()
            .filter(|w| w.len() == signature.len() && encode(w).as_str() == signature)
            .cloned()
            .collect();
        debug!(signature, hits = words.len(), scanned = self.words.len(), "scan query");
        words
    }
}
