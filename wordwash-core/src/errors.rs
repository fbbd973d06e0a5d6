//! errors.rs - Custom error types for the wordwash-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.

use thiserror::Error;

/// This enum represents all possible error types in the `wordwash-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WordwashError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to compile match pattern from {0} word(s): {1}")]
    PatternCompilation(usize, regex::Error),

    #[error("Failed to parse word list file: {0}")]
    ListParse(#[from] serde_yml::Error),

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),
}
