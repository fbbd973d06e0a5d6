// wordwash/src/commands/mod.rs
//! Command implementations for the wordwash CLI.

pub mod check;
pub mod purify;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

use wordwash_core::{merge_lists, MatchOptions, WordLists};

use crate::cli::ScanArgs;

/// Reads the input from a file, or from stdin when no file was given.
pub fn read_input(input_file: Option<&PathBuf>) -> Result<String> {
    match input_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read input from stdin")?;
            Ok(buffer)
        }
    }
}

/// Loads the effective word lists: the defaults, with an optional user file
/// merged over them.
pub fn load_lists(lists_file: Option<&Path>) -> Result<WordLists> {
    let defaults = WordLists::load_default_lists()?;
    match lists_file {
        Some(path) => {
            let user_lists = WordLists::load_from_file(path)?;
            Ok(merge_lists(defaults, user_lists))
        }
        None => Ok(defaults.clone()),
    }
}

/// Builds the engine match options from the shared scan arguments.
pub fn build_match_options(scan: &ScanArgs, lists: &WordLists) -> MatchOptions {
    MatchOptions {
        forbidden_list: Some(lists.forbidden.clone()),
        substring_mode: scan.substrings.into(),
        substring_list: Some(lists.substrings.clone()),
        fields: if scan.fields.is_empty() {
            None
        } else {
            Some(scan.fields.clone())
        },
    }
}
