//! Alias Forge - anonymous username generation
//!
//! A simple CLI tool and library for generating randomized usernames from
//! themed word pairs or random characters, unique within each batch.

pub mod error;
pub mod export;
pub mod generator;
pub mod types;

// Re-export commonly used types
pub use error::{AliasForgeError, Result};
pub use types::{
    BatchRequest, BatchResult, CaseRule, GenerationMethod, Separator, StopReason, MAX_COUNT,
    MIN_COUNT,
};

// Re-export main functionality
pub use generator::{
    apply_case, generate_batch, generate_one, BatchCollector, BatchProgress, CharsetSpec,
    MAX_LENGTH, MIN_LENGTH,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
