// wordwash-core/tests/detect_tests.rs
//! Integration tests for the `check` detection entry points.

use anyhow::Result;
use serde_json::json;
use test_log::test; // For integrating with `env_logger` in tests

use wordwash_core::{check, check_text, check_with_list, MatchOptions, SubstringMode};

fn options_with_mode(mode: SubstringMode) -> MatchOptions {
    MatchOptions {
        substring_mode: mode,
        ..MatchOptions::default()
    }
}

#[test]
fn returns_empty_with_no_forbidden_words() -> Result<()> {
    assert!(check_text("No swearwords here", &MatchOptions::default())?.is_empty());
    Ok(())
}

#[test]
fn returns_forbidden_words_found_in_dirty_string() -> Result<()> {
    let found = check_text(
        "something damn something something poo something",
        &MatchOptions::default(),
    )?;
    assert_eq!(found, vec!["damn", "poo"]);
    Ok(())
}

#[test]
fn does_not_target_substrings_by_default() -> Result<()> {
    let detected = check_text("foo ass bar", &MatchOptions::default())?;
    let not_detected = check_text("foo grass bar", &MatchOptions::default())?;

    assert_eq!(detected.len(), 1);
    assert!(not_detected.is_empty());
    Ok(())
}

#[test]
fn preserves_original_casing_of_matches() -> Result<()> {
    let found = check_text("Damn you and DAMN him", &MatchOptions::default())?;
    assert_eq!(found, vec!["Damn", "DAMN"]);
    Ok(())
}

#[test]
fn works_equally_for_objects_and_arrays_recursively() -> Result<()> {
    let options = MatchOptions::default();

    let found_in_object = check(
        &json!({
            "foo": "something damn",
            "bar": { "test": "something poo", "bar": "crap woooh" }
        }),
        &options,
    )?;
    assert_eq!(found_in_object, vec!["damn", "poo", "crap"]);

    let found_in_array = check(
        &json!([
            "something damn",
            ["something poo"],
            { "foo": [{ "bar": "something crap" }] }
        ]),
        &options,
    )?;
    assert_eq!(found_in_array, vec!["damn", "poo", "crap"]);
    Ok(())
}

#[test]
fn strict_mode_matches_inside_words() -> Result<()> {
    let options = options_with_mode(SubstringMode::Strict);

    assert_eq!(check_text("foo ass bar", &options)?.len(), 1);
    assert_eq!(check_text("foo grass bar", &options)?.len(), 1);
    Ok(())
}

#[test]
fn lite_mode_excludes_strict_false_positives() -> Result<()> {
    let text = "foo grass bar liverpool grasscutta";

    let strict = check_text(text, &options_with_mode(SubstringMode::Strict))?;
    assert_eq!(strict.len(), 3);

    let lite = check_text(text, &options_with_mode(SubstringMode::Lite))?;
    assert!(lite.is_empty());
    Ok(())
}

#[test]
fn lite_mode_appends_substring_matches_after_primary_matches() -> Result<()> {
    // The substring-list pass is concatenated after the whole-word pass, so
    // a term found by both appears twice, and the combined result is not in
    // purely textual order.
    let found = check_text("fucking hell", &options_with_mode(SubstringMode::Lite))?;
    assert_eq!(found, vec!["fucking", "hell", "fucking"]);
    Ok(())
}

#[test]
fn lite_mode_honors_a_custom_substring_list() -> Result<()> {
    let options = MatchOptions {
        substring_mode: SubstringMode::Lite,
        substring_list: Some(vec!["cutta".to_string()]),
        ..MatchOptions::default()
    };
    let found = check_text("foo grasscutta bar", &options)?;
    assert_eq!(found, vec!["cutta"]);
    Ok(())
}

#[test]
fn custom_forbidden_list_overrides_the_default() -> Result<()> {
    let words = vec!["tomato".to_string(), "cabbage".to_string()];
    let found = check_text("a damn tomato and a Cabbage", &MatchOptions::from(words))?;
    assert_eq!(found, vec!["tomato", "Cabbage"]);
    Ok(())
}

#[test]
fn legacy_bare_list_call_form_is_preserved() -> Result<()> {
    // Historically `check` accepted a bare word array as its second argument.
    let list = vec!["crumpet".to_string()];
    let found = check_with_list(&json!({ "msg": "pass the crumpet" }), &list)?;
    assert_eq!(found, vec!["crumpet"]);
    Ok(())
}

#[test]
fn fields_restrict_which_top_level_keys_are_scanned() -> Result<()> {
    let options = MatchOptions {
        fields: Some(vec!["bio".to_string()]),
        ..MatchOptions::default()
    };
    let found = check(
        &json!({ "name": "damn", "bio": "poo stuff" }),
        &options,
    )?;
    assert_eq!(found, vec!["poo"]);
    Ok(())
}

#[test]
fn non_string_targets_yield_empty_results() -> Result<()> {
    let options = MatchOptions::default();
    assert!(check(&json!(42), &options)?.is_empty());
    assert!(check(&json!(null), &options)?.is_empty());
    assert!(check(&json!({}), &options)?.is_empty());
    assert!(check(&json!({ "count": 3, "flag": true }), &options)?.is_empty());
    Ok(())
}

#[test]
fn empty_forbidden_list_matches_nothing() -> Result<()> {
    let options = MatchOptions {
        forbidden_list: Some(Vec::new()),
        ..MatchOptions::default()
    };
    assert!(check_text("damn poo crap", &options)?.is_empty());
    Ok(())
}

#[test]
fn word_boundaries_hold_across_joined_leaf_strings() -> Result<()> {
    // Leaves are joined with a space before scanning, so two clean halves
    // cannot merge into a forbidden word across the join.
    let found = check(&json!(["da", "mn"]), &MatchOptions::default())?;
    assert!(found.is_empty());
    Ok(())
}
