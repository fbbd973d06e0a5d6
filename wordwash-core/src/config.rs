//! Configuration management for `wordwash-core`.
//!
//! This module defines the word lists consumed by the pattern builder and the
//! strongly-typed option structs accepted by `check` and `purify`. It handles
//! deserialization of YAML word-list files and provides utilities for loading
//! and merging them.

use anyhow::{Context, Result};
use log::{debug, info};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The masking character used when no explicit obscure symbol is configured.
pub const DEFAULT_OBSCURE_SYMBOL: char = '*';

/// The word lists driving detection and redaction.
///
/// `forbidden` is the primary list, matched whole-word by default. `substrings`
/// is the narrower list consulted only in lite substring mode, curated so its
/// entries are safe to match inside larger words. `replacements` is the benign
/// vocabulary used by replacement-mode purify.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WordLists {
    pub forbidden: Vec<String>,
    pub substrings: Vec<String>,
    pub replacements: Vec<String>,
}

/// Parsed once from the embedded asset, then shared for the process lifetime.
static DEFAULT_LISTS: OnceCell<WordLists> = OnceCell::new();

impl WordLists {
    /// Loads the default word lists from the embedded configuration.
    pub fn load_default_lists() -> Result<&'static Self> {
        DEFAULT_LISTS.get_or_try_init(|| {
            debug!("Loading default word lists from embedded string...");
            let default_yaml = include_str!("../config/default_lists.yaml");
            let lists: WordLists = serde_yml::from_str(default_yaml)
                .context("Failed to parse default word lists")?;

            debug!(
                "Loaded {} forbidden, {} substring and {} replacement words.",
                lists.forbidden.len(),
                lists.substrings.len(),
                lists.replacements.len()
            );
            Ok(lists)
        })
    }

    /// Loads word lists from a YAML file.
    ///
    /// Absent keys deserialize as empty lists, so a file may override any
    /// subset of the three lists (see [`merge_lists`]).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom word lists from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read word list file {}", path.display()))?;
        let lists: WordLists = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse word list file {}", path.display()))?;

        debug!(
            "Loaded {} forbidden, {} substring and {} replacement words from file.",
            lists.forbidden.len(),
            lists.substrings.len(),
            lists.replacements.len()
        );
        Ok(lists)
    }
}

/// Merges user-supplied word lists with defaults.
///
/// Each non-empty user list replaces the corresponding default list wholesale;
/// empty lists keep the defaults. The lists are data, not rules, so there is
/// no per-entry merge.
pub fn merge_lists(default_lists: &WordLists, user_lists: WordLists) -> WordLists {
    let mut merged = default_lists.clone();
    if !user_lists.forbidden.is_empty() {
        debug!(
            "Overriding default forbidden list with {} user words.",
            user_lists.forbidden.len()
        );
        merged.forbidden = user_lists.forbidden;
    }
    if !user_lists.substrings.is_empty() {
        debug!(
            "Overriding default substring list with {} user words.",
            user_lists.substrings.len()
        );
        merged.substrings = user_lists.substrings;
    }
    if !user_lists.replacements.is_empty() {
        debug!(
            "Overriding default replacement list with {} user words.",
            user_lists.replacements.len()
        );
        merged.replacements = user_lists.replacements;
    }
    merged
}

/// Controls where list words are allowed to match within the scanned text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubstringMode {
    /// Whole-word matches only.
    #[default]
    Off,
    /// Matches anywhere, including inside larger words.
    Strict,
    /// Whole-word matches against the primary list, plus bare substring
    /// matches against the separate substring-only list.
    Lite,
}

/// Options accepted by [`check`](crate::check).
///
/// All fields have defaults; `MatchOptions::default()` scans with the
/// embedded word lists, whole-word matching and no field restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Overrides the default primary word list.
    pub forbidden_list: Option<Vec<String>>,
    /// Whole-word, bare substring, or lite substring matching.
    pub substring_mode: SubstringMode,
    /// Overrides the default substring-only list; consulted only in lite mode.
    pub substring_list: Option<Vec<String>>,
    /// Restricts which top-level keys of a structured target are scanned.
    /// `None` means all keys. When given, the filter is also applied to
    /// object keys at deeper nesting levels.
    pub fields: Option<Vec<String>>,
}

impl From<Vec<String>> for MatchOptions {
    /// Supports the historical `check(target, list)` call form, where a bare
    /// word list stood in for options with only the primary list overridden.
    fn from(forbidden_list: Vec<String>) -> Self {
        Self {
            forbidden_list: Some(forbidden_list),
            ..Self::default()
        }
    }
}

/// Options accepted by [`purify`](crate::purify).
///
/// Extends [`MatchOptions`] with the redaction strategy: masking by default,
/// or replacement-word substitution when `replace` is set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PurifyOptions {
    #[serde(flatten)]
    pub matching: MatchOptions,
    /// Substitute replacement words instead of masking.
    pub replace: bool,
    /// Overrides the default replacement word list; used only with `replace`.
    pub replacements_list: Option<Vec<String>>,
    /// With `replace`: the same matched term always maps to the same
    /// replacement word within one `purify` call.
    pub map: bool,
    /// The character used to fill the interior of masked matches.
    pub obscure_symbol: char,
}

impl Default for PurifyOptions {
    fn default() -> Self {
        Self {
            matching: MatchOptions::default(),
            replace: false,
            replacements_list: None,
            map: false,
            obscure_symbol: DEFAULT_OBSCURE_SYMBOL,
        }
    }
}
