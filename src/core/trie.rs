// --- File: src/core/trie.rs
use crate::core::lookup::{Lookup, Strategy};
use crate::core::signature::{child_slot, encode};
use crate::core::types::{is_query, WordSet};
use crate::dictionary::is_valid_word;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

const ROOT: usize = 0;
const FANOUT: usize = 8;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TrieNode {
    /// Child node per keypad digit, `'2'` at slot 0 through `'9'` at slot 7.
    children: [Option<usize>; FANOUT],
    /// Words whose signature ends exactly at this node.
    words: Option<WordSet>,
}

/// An 8-ary trie keyed by signature digit, stored as an arena.
///
/// The root consumes no digit; a node at depth `d` is reached after `d`
/// digits. Every node on the path to an inserted signature exists even when it
/// stores no words itself. Nodes are only ever added, so indices stay valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrieIndex {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl Default for TrieIndex {
    fn default() -> Self {
        Self { nodes: vec![TrieNode::default()], word_count: 0 }
    }
}

impl TrieIndex {
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::default();
        for word in words {
            trie.insert(word.as_ref());
        }
        info!(nodes = trie.nodes.len(), words = trie.word_count, "trie index built");
        trie
    }

    /// Walks one level per digit of the word's signature, creating nodes on
    /// demand, and stores the word at the node reached after the last digit.
    /// O(k) where k is the word length.
    fn insert(&mut self, word: &str) {
        if !is_valid_word(word) {
            return;
        }
        let signature = encode(word);
        let mut node_idx = ROOT;
        for &digit in signature.as_str().as_bytes() {
            let Some(slot) = child_slot(digit) else {
                return;
            };
            let next_idx = if let Some(id) = self.nodes[node_idx].children[slot] {
                id
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(TrieNode::default());
                self.nodes[node_idx].children[slot] = Some(new_node_id);
                new_node_id
            };
            node_idx = next_idx;
        }
        if self.nodes[node_idx]
            .words
            .get_or_insert_with(WordSet::new)
            .insert(word.to_string())
        {
            self.word_count += 1;
        }
    }

    /// Node reached by consuming every digit of `signature`.
    fn descend(&self, signature: &str) -> Option<usize> {
        let mut node_idx = ROOT;
        for &digit in signature.as_bytes() {
            node_idx = self.nodes[node_idx].children[child_slot(digit)?]?;
        }
        Some(node_idx)
    }

    /// Gathers every word at or below `node_idx`, cut to `len` characters.
    /// Walks with an explicit stack so word length does not bound stack depth.
    fn collect(&self, node_idx: usize, len: usize, out: &mut WordSet) {
        let mut stack = vec![node_idx];
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx];
            if let Some(words) = &node.words {
                for word in words {
                    out.insert(word.get(..len).unwrap_or(word).to_string());
                }
            }
            stack.extend(node.children.iter().flatten());
        }
    }

    /// Number of nodes including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct words stored.
    pub fn word_count(&self) -> usize {
        self.word_count
    }
}

impl Lookup for TrieIndex {
    fn strategy(&self) -> Strategy {
        Strategy::Trie
    }

    /// Prefix query: every word whose signature starts with `signature`,
    /// truncated to the query length.
    /// O(q) to descend plus O(s) for the s nodes of the matching subtree.
    fn query(&self, signature: &str) -> WordSet {
        if !is_query(signature) {
            return WordSet::new();
        }
        let mut words = WordSet::new();
        if let Some(node_idx) = self.descend(signature) {
            self.collect(node_idx, signature.len(), &mut words);
        }
        debug!(signature, hits = words.len(), "trie query");
        words
    }
}
