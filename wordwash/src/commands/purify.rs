// wordwash/src/commands/purify.rs
//! The `purify` command: rewrite an input, redacting every forbidden word.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;

use wordwash_core::{purify, purify_text, PurifyOptions};

use crate::cli::PurifyCommand;
use crate::commands::{build_match_options, load_lists, read_input};

/// Runs the `purify` command, returning the process exit code.
pub fn run(cmd: &PurifyCommand) -> Result<i32> {
    info!("Starting wordwash purify operation.");

    let input = read_input(cmd.scan.input_file.as_ref())?;
    let lists = load_lists(cmd.scan.lists.as_deref())?;

    let options = PurifyOptions {
        matching: build_match_options(&cmd.scan, &lists),
        replace: cmd.replace,
        replacements_list: Some(lists.replacements.clone()),
        map: cmd.map,
        obscure_symbol: cmd.obscure_symbol,
    };

    let (output, found) = if cmd.scan.json {
        let mut target =
            serde_json::from_str(&input).context("Failed to parse input as JSON")?;
        let found = purify(&mut target, &options)?;
        (serde_json::to_string_pretty(&target)?, found)
    } else {
        purify_text(&input, &options)?
    };

    debug!(
        "Content purified. Original length: {}, rewritten length: {}.",
        input.len(),
        output.len()
    );

    match &cmd.output {
        Some(path) => {
            let mut file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            file.write_all(output.as_bytes())
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
        }
        None => println!("{}", output),
    }

    if !cmd.no_summary && !found.is_empty() {
        eprintln!(
            "wordwash: redacted {} term(s): {}",
            found.len(),
            found.join(", ")
        );
    }

    Ok(0)
}
