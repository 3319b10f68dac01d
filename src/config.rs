//! Runtime configuration loaded from TOML.
//!
//! Every key is optional:
//!
//! ```toml
//! dictionary = "assets/words"
//! strategy = "trie"          # sorted | hashed | trie | scan
//! snapshot = "cache/index.bin"
//! log_filter = "t9_core=debug"
//! ```

use crate::core::lookup::{Index, Strategy};
use crate::dictionary::{load_words, DEFAULT_DICTIONARY_PATH};
use crate::error::Result;
use crate::persistence::load_snapshot_as;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const DEFAULT_LOG_FILTER: &str = "t9_core=info";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub dictionary: PathBuf,
    pub strategy: Strategy,
    /// Prebuilt index to load instead of reading the dictionary.
    pub snapshot: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            strategy: Strategy::default(),
            snapshot: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        info!(path = %path.display(), strategy = %config.strategy, "config loaded");
        Ok(config)
    }

    /// Builds the configured index. A usable snapshot wins over the
    /// dictionary; an unreadable one is reported and the dictionary is used.
    pub fn open_index(&self) -> Result<Index> {
        if let Some(snapshot) = &self.snapshot {
            match load_snapshot_as(snapshot, self.strategy) {
                Ok(index) => return Ok(index),
                Err(e) => warn!(path = %snapshot.display(), error = %e, "snapshot unusable, rebuilding"),
            }
        }
        let words = load_words(&self.dictionary)?;
        Ok(Index::build(self.strategy, words))
    }
}
