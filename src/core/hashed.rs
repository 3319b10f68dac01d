// File: src/core/hashed.rs
use crate::core::lookup::{Lookup, Strategy};
use crate::core::signature::encode;
use crate::core::types::{is_query, Signature, WordSet};
use crate::dictionary::is_valid_word;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// Signature -> words map. Exact queries only, O(1) expected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HashedIndex {
    words: HashMap<Signature, WordSet>,
}

impl HashedIndex {
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        for word in words {
            index.insert(word.as_ref());
        }
        info!(signatures = index.words.len(), "hashed index built");
        index
    }

    fn insert(&mut self, word: &str) {
        if !is_valid_word(word) {
            return;
        }
        self.words
            .entry(encode(word))
            .or_default()
            .insert(word.to_string());
    }

    /// Number of distinct signatures.
    pub fn signatures(&self) -> usize {
        self.words.len()
    }
}

impl Lookup for HashedIndex {
    fn strategy(&self) -> Strategy {
        Strategy::Hashed
    }

    fn query(&self, signature: &str) -> WordSet {
        if !is_query(signature) {
            return WordSet::new();
        }
        let words = self
            .words
            .get(&Signature::from(signature))
            .cloned()
            .unwrap_or_default();
        debug!(signature, hits = words.len(), "hashed query");
        words
    }
}
