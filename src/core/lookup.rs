// File: src/core/lookup.rs
use crate::core::hashed::HashedIndex;
use crate::core::scan::ScanIndex;
use crate::core::signature;
use crate::core::sorted::SortedIndex;
use crate::core::trie::TrieIndex;
use crate::core::types::{Signature, WordSet};
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Read-only signature lookup shared by every index strategy.
///
/// Implementations are built once and never mutated, so one index can serve
/// any number of sessions across threads without locking.
pub trait Lookup: Send + Sync {
    fn strategy(&self) -> Strategy;

    fn encode(&self, word: &str) -> Signature {
        signature::encode(word)
    }

    /// Words matching `signature`. An empty signature, or one containing a
    /// character outside `'2'..='9'`, yields an empty set.
    fn query(&self, signature: &str) -> WordSet;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Sorted,
    Hashed,
    #[default]
    Trie,
    Scan,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [Strategy::Sorted, Strategy::Hashed, Strategy::Trie, Strategy::Scan];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Sorted => "sorted",
            Strategy::Hashed => "hashed",
            Strategy::Trie => "trie",
            Strategy::Scan => "scan",
        }
    }

    /// Whether queries match signature prefixes rather than whole signatures.
    pub fn matches_prefixes(self) -> bool {
        matches!(self, Strategy::Trie)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownStrategy(s.to_string()))
    }
}

/// One built index of any strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Index {
    Sorted(SortedIndex),
    Hashed(HashedIndex),
    Trie(TrieIndex),
    Scan(ScanIndex),
}

impl Index {
    pub fn build<I, S>(strategy: Strategy, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match strategy {
            Strategy::Sorted => Index::Sorted(SortedIndex::build(words)),
            Strategy::Hashed => Index::Hashed(HashedIndex::build(words)),
            Strategy::Trie => Index::Trie(TrieIndex::build(words)),
            Strategy::Scan => Index::Scan(ScanIndex::build(words)),
        }
    }

    fn inner(&self) -> &dyn Lookup {
        match self {
            Index::Sorted(index) => index,
            Index::Hashed(index) => index,
            Index::Trie(index) => index,
            Index::Scan(index) => index,
        }
    }
}

impl Lookup for Index {
    fn strategy(&self) -> Strategy {
        self.inner().strategy()
    }

    fn query(&self, signature: &str) -> WordSet {
        self.inner().query(signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>().unwrap(), strategy);
        }
        assert_eq!("TRIE".parse::<Strategy>().unwrap(), Strategy::Trie);
        assert!(matches!("btree".parse::<Strategy>(), Err(Error::UnknownStrategy(_))));
    }

    #[test]
    fn index_dispatches_to_its_strategy() {
        for strategy in Strategy::ALL {
            let index = Index::build(strategy, ["home", "gone", "good"]);
            assert_eq!(index.strategy(), strategy);
            assert_eq!(index.query("4663").len(), 3);
            assert_eq!(index.encode("home").as_str(), "4663");
        }
    }
}
