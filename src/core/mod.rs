// src/core/mod.rs
pub mod hashed;
pub mod lookup;
pub mod scan;
pub mod session;
pub mod signature;
pub mod sorted;
pub mod trie;
pub mod types;
