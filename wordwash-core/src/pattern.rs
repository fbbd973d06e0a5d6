//! pattern.rs - Builds and caches the word-matching patterns.
//!
//! This module converts a list of literal words into a compiled,
//! case-insensitive alternation pattern, optionally anchored on word
//! boundaries. Compilation goes through a thread-safe, global cache so that
//! repeated `check`/`purify` calls with the same list do not recompile.

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::{Match, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::errors::WordwashError;

/// Maximum allowed length for a single list word.
pub const MAX_WORD_LENGTH: usize = 100;

/// Controls whether a pattern may only match at word boundaries.
///
/// A "word" is a contiguous run of word characters; a boundary is the
/// transition between a word character and a non-word character, or the edge
/// of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Anchor the alternation with `\b` on both sides.
    Word,
    /// Bare substring matching, no anchors.
    None,
}

/// A compiled matching pattern over a word list.
///
/// An empty (or all-empty-word) list compiles to a pattern that matches
/// nothing, so detection degrades gracefully to "no matches found" instead of
/// failing.
#[derive(Debug)]
pub struct MatchPattern {
    regex: Option<regex::Regex>,
}

impl MatchPattern {
    /// Returns all non-overlapping matches in `text`, left to right.
    pub fn find_matches<'t>(&self, text: &'t str) -> Vec<Match<'t>> {
        match &self.regex {
            Some(regex) => regex.find_iter(text).collect(),
            None => Vec::new(),
        }
    }

    /// Reports whether the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|regex| regex.is_match(text))
    }
}

lazy_static! {
    /// A thread-safe, global cache for compiled patterns.
    /// The key is a hash of the word list and the boundary mode.
    static ref PATTERN_CACHE: RwLock<HashMap<u64, Arc<MatchPattern>>> = RwLock::new(HashMap::new());
}

/// Hashes a word list and boundary mode into a stable cache key.
fn hash_pattern_request<S: AsRef<str>>(words: &[S], boundary: Boundary) -> u64 {
    let mut hasher = DefaultHasher::new();
    for word in words {
        word.as_ref().hash(&mut hasher);
    }
    words.len().hash(&mut hasher);
    boundary.hash(&mut hasher);
    hasher.finish()
}

/// Escapes each word so it matches only as a literal character sequence and
/// joins the results with alternation into one capturing group `(w1|w2|...)`.
///
/// Empty words are skipped with a warning; they would otherwise match the
/// empty string at every position.
pub fn build_alternation_pattern<S: AsRef<str>>(words: &[S]) -> String {
    let escaped: Vec<String> = words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| {
            if word.is_empty() {
                warn!("Skipping empty word in match list.");
                return false;
            }
            true
        })
        .map(regex::escape)
        .collect();
    format!("({})", escaped.join("|"))
}

/// Compiles a word list into a [`MatchPattern`] for the given boundary mode.
/// This is the low-level function that performs the actual compilation.
///
/// Matching is case-insensitive throughout. Words longer than
/// [`MAX_WORD_LENGTH`] are rejected up front with
/// [`WordwashError::InvalidConfiguration`].
pub fn build_match_pattern<S: AsRef<str>>(
    words: &[S],
    boundary: Boundary,
) -> Result<MatchPattern, WordwashError> {
    let usable: Vec<&str> = words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| !word.is_empty())
        .collect();

    for word in &usable {
        if word.len() > MAX_WORD_LENGTH {
            let preview: String = word.chars().take(16).collect();
            return Err(WordwashError::InvalidConfiguration(format!(
                "list word exceeds {} bytes: '{}...'",
                MAX_WORD_LENGTH, preview
            )));
        }
    }

    if usable.is_empty() {
        debug!("Empty word list; building a pattern that matches nothing.");
        return Ok(MatchPattern { regex: None });
    }

    let alternation = build_alternation_pattern(&usable);
    let pattern = match boundary {
        Boundary::Word => format!(r"\b{}\b", alternation),
        Boundary::None => alternation,
    };

    let regex = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .size_limit(10 * (1 << 20)) // 10 MB limit for the compiled pattern
        .build()
        .map_err(|e| WordwashError::PatternCompilation(usable.len(), e))?;

    debug!("Compiled match pattern over {} word(s).", usable.len());
    Ok(MatchPattern { regex: Some(regex) })
}

/// Gets a compiled pattern from the cache or compiles it if not found.
///
/// This is the entry point used by `check` and `purify`. It returns an `Arc`
/// so the compiled pattern can be shared cheaply.
pub fn get_or_compile_pattern<S: AsRef<str>>(
    words: &[S],
    boundary: Boundary,
) -> Result<Arc<MatchPattern>, WordwashError> {
    let cache_key = hash_pattern_request(words, boundary);

    {
        let cache = PATTERN_CACHE.read().unwrap();
        if let Some(pattern) = cache.get(&cache_key) {
            debug!("Serving compiled pattern from cache for key: {}", &cache_key);
            return Ok(Arc::clone(pattern));
        }
    } // Read lock is released here.

    let compiled = Arc::new(build_match_pattern(words, boundary)?);
    PATTERN_CACHE
        .write()
        .unwrap()
        .insert(cache_key, Arc::clone(&compiled));

    debug!("Compiled and cached pattern for key: {}", &cache_key);
    Ok(compiled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched<'t>(pattern: &MatchPattern, text: &'t str) -> Vec<&'t str> {
        pattern.find_matches(text).iter().map(|m| m.as_str()).collect()
    }

    #[test]
    fn word_boundary_rejects_substrings() {
        let pattern = build_match_pattern(&["ass"], Boundary::Word).unwrap();
        assert_eq!(matched(&pattern, "foo ass bar"), vec!["ass"]);
        assert!(matched(&pattern, "foo grass bar").is_empty());
    }

    #[test]
    fn bare_mode_matches_inside_words() {
        let pattern = build_match_pattern(&["ass"], Boundary::None).unwrap();
        assert_eq!(matched(&pattern, "foo grass bar"), vec!["ass"]);
    }

    #[test]
    fn matching_is_case_insensitive_and_preserves_original_casing() {
        let pattern = build_match_pattern(&["damn"], Boundary::Word).unwrap();
        assert_eq!(matched(&pattern, "DAMN and Damn"), vec!["DAMN", "Damn"]);
    }

    #[test]
    fn special_characters_are_treated_as_literals() {
        let pattern = build_match_pattern(&["a.c", "x(y)"], Boundary::None).unwrap();
        assert_eq!(matched(&pattern, "a.c abc x(y)"), vec!["a.c", "x(y)"]);
    }

    #[test]
    fn empty_list_matches_nothing() {
        let pattern = build_match_pattern::<&str>(&[], Boundary::Word).unwrap();
        assert!(!pattern.is_match("anything at all"));
        assert!(pattern.find_matches("anything at all").is_empty());
    }

    #[test]
    fn empty_words_are_skipped() {
        let pattern = build_match_pattern(&["", "poo"], Boundary::Word).unwrap();
        assert_eq!(matched(&pattern, "a poo b"), vec!["poo"]);
    }

    #[test]
    fn oversized_word_is_rejected() {
        let long = "x".repeat(MAX_WORD_LENGTH + 1);
        let err = build_match_pattern(&[long.as_str()], Boundary::Word).unwrap_err();
        assert!(matches!(err, WordwashError::InvalidConfiguration(_)));
    }

    #[test]
    fn matches_advance_past_each_other() {
        let pattern = build_match_pattern(&["poo"], Boundary::None).unwrap();
        assert_eq!(matched(&pattern, "poopoo"), vec!["poo", "poo"]);
    }
}
