//! detect.rs - The `check` entry points.
//!
//! Detection collects every scannable leaf string of the target, joins them
//! into a single scan buffer and runs the compiled match pattern over it,
//! returning the matched terms in read order. In lite substring mode a second,
//! boundary-free pass over the substring-only list is appended after the
//! primary results.

use anyhow::Result;
use log::debug;
use serde_json::Value;
use std::sync::Arc;

use crate::config::{MatchOptions, SubstringMode, WordLists};
use crate::pattern::{get_or_compile_pattern, Boundary, MatchPattern};
use crate::walk::{walk_strings, Segment};

/// Maps a substring mode to the boundary behavior of the primary pattern.
pub(crate) fn boundary_for(mode: SubstringMode) -> Boundary {
    match mode {
        SubstringMode::Off | SubstringMode::Lite => Boundary::Word,
        SubstringMode::Strict => Boundary::None,
    }
}

/// Compiles the primary pattern for `options`, falling back to the embedded
/// forbidden list when no override is given.
pub(crate) fn primary_pattern(options: &MatchOptions) -> Result<Arc<MatchPattern>> {
    let boundary = boundary_for(options.substring_mode);
    let pattern = match &options.forbidden_list {
        Some(words) => get_or_compile_pattern(words, boundary)?,
        None => get_or_compile_pattern(&WordLists::load_default_lists()?.forbidden, boundary)?,
    };
    Ok(pattern)
}

/// Compiles the boundary-free pattern over the substring-only list.
fn substring_pattern(options: &MatchOptions) -> Result<Arc<MatchPattern>> {
    let pattern = match &options.substring_list {
        Some(words) => get_or_compile_pattern(words, Boundary::None)?,
        None => {
            get_or_compile_pattern(&WordLists::load_default_lists()?.substrings, Boundary::None)?
        }
    };
    Ok(pattern)
}

/// Decides whether a nested leaf passes the field filter.
///
/// Field filtering below the top level only applies when `fields` was
/// explicitly provided, and only to object keys; array elements inherit the
/// selection of their nearest selected ancestor.
pub(crate) fn field_selected(segment: Segment<'_>, options: &MatchOptions) -> bool {
    match (&options.fields, segment) {
        (Some(fields), Segment::Key(key)) => fields.iter().any(|field| field.as_str() == key),
        _ => true,
    }
}

/// Detects forbidden terms in `target`, which may be a plain string or an
/// arbitrarily nested container of strings.
///
/// Returns the matched terms with their original casing, in read order:
/// left to right within each string, traversal order across a structure. A
/// target that is neither a string nor a container yields an empty result.
pub fn check(target: &Value, options: &MatchOptions) -> Result<Vec<String>> {
    let texts = collect_texts(target, options);
    if texts.is_empty() {
        return Ok(Vec::new());
    }

    // Scan one joined buffer rather than each leaf separately. The space
    // separator keeps originally-separate strings from merging into a
    // spurious cross-string match.
    let buffer = texts.join(" ");
    scan_buffer(&buffer, options)
}

/// Detects forbidden terms in a plain string. Equivalent to [`check`] on a
/// string target without the intermediate value representation.
pub fn check_text(text: &str, options: &MatchOptions) -> Result<Vec<String>> {
    scan_buffer(text, options)
}

/// Detects forbidden terms against an explicit word list.
///
/// This is the migration of the historical call form that accepted a bare
/// word array as the second argument; it is shorthand for [`check`] with
/// options carrying only `forbidden_list`.
pub fn check_with_list(target: &Value, forbidden_list: &[String]) -> Result<Vec<String>> {
    let options = MatchOptions::from(forbidden_list.to_vec());
    check(target, &options)
}

fn scan_buffer(buffer: &str, options: &MatchOptions) -> Result<Vec<String>> {
    let primary = primary_pattern(options)?;
    let mut found: Vec<String> = primary
        .find_matches(buffer)
        .iter()
        .map(|m| m.as_str().to_string())
        .collect();

    if options.substring_mode == SubstringMode::Lite {
        // The substring-list pass is appended after the primary results,
        // not merged into textual order.
        let substring = substring_pattern(options)?;
        found.extend(
            substring
                .find_matches(buffer)
                .iter()
                .map(|m| m.as_str().to_string()),
        );
    }

    debug!("Detected {} forbidden term(s).", found.len());
    Ok(found)
}

/// Collects the scannable leaf strings of `target` in traversal order,
/// honoring the `fields` selection.
fn collect_texts<'a>(target: &'a Value, options: &MatchOptions) -> Vec<&'a str> {
    let mut texts = Vec::new();
    match target {
        Value::String(text) => texts.push(text.as_str()),
        Value::Object(members) => {
            for (key, member) in members {
                if let Some(fields) = &options.fields {
                    if !fields.iter().any(|field| field == key) {
                        continue;
                    }
                }
                collect_member(member, options, &mut texts);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_member(item, options, &mut texts);
            }
        }
        _ => {}
    }
    texts
}

fn collect_member<'a>(member: &'a Value, options: &MatchOptions, texts: &mut Vec<&'a str>) {
    match member {
        Value::String(text) => texts.push(text),
        Value::Object(_) | Value::Array(_) => {
            walk_strings(member, None, &mut |leaf, segment| {
                if field_selected(segment, options) {
                    texts.push(leaf);
                }
            });
        }
        _ => {}
    }
}
