// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// The set of words answering a query. Ordered so that iteration is
/// deterministic, which the typing session relies on when cycling.
pub type WordSet = BTreeSet<String>;

/// A keypad signature: one symbol per character of the source word, `'2'..='9'`
/// for letters and `' '` for anything else.
///
/// Values are never edited in place; `with_digit` and `without_last` hand back
/// a fresh signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Signature(String);

impl Signature {
    pub fn new() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A signature can be used as a query only if it is non-empty and made
    /// of keypad digits `'2'..='9'`.
    pub fn is_query(&self) -> bool {
        is_query(&self.0)
    }

    pub fn with_digit(&self, digit: char) -> Self {
        let mut next = String::with_capacity(self.0.len() + 1);
        next.push_str(&self.0);
        next.push(digit);
        Self(next)
    }

    pub fn without_last(&self) -> Self {
        let mut chars = self.0.chars();
        chars.next_back();
        Self(chars.as_str().to_string())
    }
}

impl From<String> for Signature {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Signature {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Signature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns true when `signature` is non-empty and every character is a keypad
/// digit in `'2'..='9'`.
pub fn is_query(signature: &str) -> bool {
    !signature.is_empty() && signature.bytes().all(|b| (b'2'..=b'9').contains(&b))
}

/// A (signature, word) pair as stored by the sorted index.
/// Ordering looks at the signature only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordEntry {
    pub signature: Signature,
    pub word: String,
}

impl PartialEq for WordEntry {
    fn eq(&self, other: &Self) -> bool {
        self.signature == other.signature
    }
}

impl Eq for WordEntry {}

impl PartialOrd for WordEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WordEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.signature.cmp(&other.signature)
    }
}
