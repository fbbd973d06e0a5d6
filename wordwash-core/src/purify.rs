//! purify.rs - The `purify` entry points.
//!
//! Redaction rewrites every match of the primary pattern in place, either by
//! masking (keep the first and last character, fill the interior with the
//! obscure symbol) or by substituting a replacement word, and returns the
//! ordered list of original matched terms. Replacement picks words at random
//! unless the stable per-call mapping is enabled, in which case the same
//! matched text always receives the same replacement word.

use anyhow::Result;
use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::{PurifyOptions, WordLists};
use crate::detect::{field_selected, primary_pattern};
use crate::errors::WordwashError;
use crate::pattern::MatchPattern;
use crate::walk::{walk_strings_mut, Segment};

/// Call-scoped stable mapping from matched text to its replacement word.
///
/// Keys are the exact original text, so differing casings of the same word
/// are distinct entries. The cursor rotates through the replacement list,
/// wrapping modulo its length.
struct ReplacementMap {
    assigned: HashMap<String, String>,
    cursor: usize,
}

impl ReplacementMap {
    fn new() -> Self {
        Self {
            assigned: HashMap::new(),
            cursor: 0,
        }
    }

    fn resolve(&mut self, term: &str, replacements: &[String]) -> String {
        if let Some(existing) = self.assigned.get(term) {
            return existing.clone();
        }
        let word = &replacements[self.cursor % replacements.len()];
        self.cursor += 1;
        // The case decision is frozen at first assignment and reused
        // verbatim for later occurrences, whatever their casing.
        let adjusted = match_leading_case(word, term);
        self.assigned.insert(term.to_string(), adjusted.clone());
        adjusted
    }
}

/// Masks a matched term: first character, obscure symbol repeated over the
/// interior, last character. A one-character match doubles its character; a
/// two-character match passes through with no filler.
fn mask_term(term: &str, symbol: char) -> String {
    let chars: Vec<char> = term.chars().collect();
    let (first, last) = match (chars.first(), chars.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return String::new(),
    };
    let mut masked = String::with_capacity(term.len() + symbol.len_utf8());
    masked.push(first);
    for _ in 0..chars.len().saturating_sub(2) {
        masked.push(symbol);
    }
    masked.push(last);
    masked
}

/// Uppercases the replacement's first letter iff the matched original starts
/// with an uppercase letter. Caseless leading characters (digits, symbols)
/// never trigger an adjustment.
fn match_leading_case(replacement: &str, original: &str) -> String {
    let starts_upper = original.chars().next().is_some_and(char::is_uppercase);
    if !starts_upper {
        return replacement.to_string();
    }
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The per-call rewrite state: compiled pattern, resolved replacement list,
/// optional stable mapping, and the accumulated match list.
struct Rewriter<'a> {
    pattern: Arc<MatchPattern>,
    options: &'a PurifyOptions,
    replacements: &'a [String],
    map: Option<ReplacementMap>,
    matches: Vec<String>,
}

impl<'a> Rewriter<'a> {
    fn start(options: &'a PurifyOptions) -> Result<Self> {
        let pattern = primary_pattern(&options.matching)?;
        let replacements: &'a [String] = match &options.replacements_list {
            Some(list) => list,
            None => &WordLists::load_default_lists()?.replacements,
        };
        if options.replace && replacements.is_empty() {
            return Err(WordwashError::InvalidConfiguration(
                "`replace` requires a non-empty replacements list".to_string(),
            )
            .into());
        }
        let map = (options.replace && options.map).then(ReplacementMap::new);
        Ok(Self {
            pattern,
            options,
            replacements,
            map,
            matches: Vec::new(),
        })
    }

    /// Rewrites one string, recording each matched span in order.
    fn rewrite_string<R: Rng + ?Sized>(&mut self, text: &str, rng: &mut R) -> String {
        let found = self.pattern.find_matches(text);
        if found.is_empty() {
            return text.to_string();
        }

        let mut rewritten = String::with_capacity(text.len());
        let mut last_end = 0usize;
        for m in found {
            let original = m.as_str();
            self.matches.push(original.to_string());

            let replacement = if !self.options.replace {
                mask_term(original, self.options.obscure_symbol)
            } else if let Some(map) = self.map.as_mut() {
                map.resolve(original, self.replacements)
            } else {
                self.replacements
                    .choose(rng)
                    .map(|word| match_leading_case(word, original))
                    .unwrap_or_default()
            };

            rewritten.push_str(&text[last_end..m.start()]);
            rewritten.push_str(&replacement);
            last_end = m.end();
        }
        rewritten.push_str(&text[last_end..]);
        rewritten
    }

    /// Rewrites one selected top-level member: a string directly, a container
    /// through the walker with deep field filtering.
    fn rewrite_member<R: Rng + ?Sized>(&mut self, member: &mut Value, rng: &mut R) {
        match member {
            Value::String(text) => {
                let rewritten = self.rewrite_string(text, rng);
                *text = rewritten;
            }
            Value::Object(_) | Value::Array(_) => {
                walk_strings_mut(member, None, &mut |leaf: &mut String, segment: Segment<'_>| {
                    if field_selected(segment, &self.options.matching) {
                        let rewritten = self.rewrite_string(leaf, rng);
                        *leaf = rewritten;
                    }
                });
            }
            _ => {}
        }
    }
}

/// Redacts forbidden terms in `target` in place, using the process-wide
/// random source for replacement-word selection.
///
/// `target` may be a plain string value or an arbitrarily nested container;
/// its shape (keys and indices) is preserved exactly, only leaf strings
/// change. Returns the original matched terms in traversal order. A target
/// that is neither a string nor a container is left untouched and yields an
/// empty match list. Callers requiring an unmodified original must pass a
/// clone.
pub fn purify(target: &mut Value, options: &PurifyOptions) -> Result<Vec<String>> {
    purify_with_rng(target, options, &mut rand::rng())
}

/// [`purify`] with an injected random source, for deterministic replacement
/// selection in tests.
pub fn purify_with_rng<R: Rng + ?Sized>(
    target: &mut Value,
    options: &PurifyOptions,
    rng: &mut R,
) -> Result<Vec<String>> {
    let mut rewriter = Rewriter::start(options)?;

    match target {
        Value::String(text) => {
            let rewritten = rewriter.rewrite_string(text, rng);
            *text = rewritten;
        }
        Value::Object(members) => {
            for (key, member) in members.iter_mut() {
                if let Some(fields) = &options.matching.fields {
                    if !fields.iter().any(|field| field == key) {
                        continue;
                    }
                }
                rewriter.rewrite_member(member, rng);
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                rewriter.rewrite_member(item, rng);
            }
        }
        _ => {}
    }

    debug!("Redacted {} forbidden term(s).", rewriter.matches.len());
    Ok(rewriter.matches)
}

/// Redacts forbidden terms in a plain string, returning the rewritten string
/// and the ordered list of original matched terms.
pub fn purify_text(text: &str, options: &PurifyOptions) -> Result<(String, Vec<String>)> {
    purify_text_with_rng(text, options, &mut rand::rng())
}

/// [`purify_text`] with an injected random source.
pub fn purify_text_with_rng<R: Rng + ?Sized>(
    text: &str,
    options: &PurifyOptions,
    rng: &mut R,
) -> Result<(String, Vec<String>)> {
    let mut rewriter = Rewriter::start(options)?;
    let rewritten = rewriter.rewrite_string(text, rng);
    Ok((rewritten, rewriter.matches))
}
