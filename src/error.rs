// File: src/error.rs
use crate::core::lookup::Strategy;
use std::io;

/// Errors raised at the edges of the crate: word-source and snapshot I/O,
/// configuration, and CLI output. Queries and session transitions never fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("snapshot serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("snapshot deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown lookup strategy: {0} (expected sorted, hashed, trie or scan)")]
    UnknownStrategy(String),

    #[error("snapshot holds a {found} index, expected {expected}")]
    SnapshotStrategy { expected: Strategy, found: Strategy },
}

pub type Result<T> = std::result::Result<T, Error>;
