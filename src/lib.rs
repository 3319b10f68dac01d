// src/lib.rs

pub mod config;
pub mod core;
pub mod dictionary;
pub mod error;
pub mod persistence;
pub mod trace_init;

pub use crate::core::lookup::{Index, Lookup, Strategy};
pub use crate::core::session::{KeypadCommand, RenderEvent, SubscriptionId, TypingSession};
pub use crate::core::signature::encode;
pub use crate::core::types::{Signature, WordSet};
pub use crate::error::{Error, Result};
