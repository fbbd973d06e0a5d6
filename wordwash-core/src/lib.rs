// wordwash-core/src/lib.rs
//! # Wordwash Core Library
//!
//! `wordwash-core` provides the fundamental logic for detecting and redacting
//! forbidden words in text. It handles plain strings as well as arbitrarily
//! nested structures of strings (objects and arrays, modeled as
//! `serde_json::Value`), matching against configurable word lists and
//! rewriting matches in place.
//!
//! The library is designed to be pure and stateless: each `check`/`purify`
//! call is self-contained, the only process-wide state being an internal
//! cache of compiled match patterns.
//!
//! ## Modules
//!
//! * `config`: Defines the [`WordLists`] data and the [`MatchOptions`] /
//!   [`PurifyOptions`] option structs.
//! * `pattern`: Builds and caches the compiled alternation patterns.
//! * `walk`: Recursive traversal of nested string containers.
//! * `detect`: The `check` entry points (detection without modification).
//! * `purify`: The `purify` entry points (masking or replacement rewriting).
//! * `errors`: The [`WordwashError`] error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use wordwash_core::{check_text, purify_text, MatchOptions, PurifyOptions};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // Detection: matched terms are returned in read order.
//!     let found = check_text("foo ass bar", &MatchOptions::default())?;
//!     assert_eq!(found, vec!["ass"]);
//!
//!     // Redaction: masking keeps the first and last character.
//!     let (purified, found) = purify_text("boob damn something poo", &PurifyOptions::default())?;
//!     assert_eq!(purified, "b**b d**n something p*o");
//!     assert_eq!(found, vec!["boob", "damn", "poo"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Entry points return `anyhow::Result`; structured failures such as
//! [`WordwashError::InvalidConfiguration`] stay downcastable. Finding no
//! matches is not an error, and an empty word list degrades to a pattern
//! that matches nothing.
//!
//! ## Concurrency
//!
//! Calls are synchronous and share no mutable state: the stable replacement
//! mapping of a `purify` call lives only for that call. Options are borrowed
//! immutably, so the same options value may serve concurrent calls.

pub mod config;
pub mod detect;
pub mod errors;
pub mod pattern;
pub mod purify;
pub mod walk;

/// Re-exports the word list data and option types.
pub use config::{
    merge_lists, MatchOptions, PurifyOptions, SubstringMode, WordLists, DEFAULT_OBSCURE_SYMBOL,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::WordwashError;

/// Re-exports the detection entry points.
pub use detect::{check, check_text, check_with_list};

/// Re-exports the redaction entry points.
pub use purify::{purify, purify_text, purify_text_with_rng, purify_with_rng};

/// Re-exports the pattern builder for advanced usage.
pub use pattern::{
    build_alternation_pattern, build_match_pattern, get_or_compile_pattern, Boundary, MatchPattern,
    MAX_WORD_LENGTH,
};

/// Re-exports the container traversal helpers.
pub use walk::{walk_strings, walk_strings_mut, Segment};
