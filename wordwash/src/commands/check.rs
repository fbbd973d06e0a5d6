// wordwash/src/commands/check.rs
//! The `check` command: scan an input and list the forbidden terms found.

use anyhow::{Context, Result};
use log::{debug, info};

use wordwash_core::check;

use crate::cli::CheckCommand;
use crate::commands::{build_match_options, load_lists, read_input};

/// Runs the `check` command, returning the process exit code.
pub fn run(cmd: &CheckCommand) -> Result<i32> {
    info!("Starting wordwash check operation.");

    let input = read_input(cmd.scan.input_file.as_ref())?;
    let lists = load_lists(cmd.scan.lists.as_deref())?;
    let options = build_match_options(&cmd.scan, &lists);

    let target = if cmd.scan.json {
        serde_json::from_str(&input).context("Failed to parse input as JSON")?
    } else {
        serde_json::Value::String(input)
    };

    let found = check(&target, &options)?;
    debug!("Check finished with {} match(es).", found.len());

    if cmd.json_stdout {
        println!("{}", serde_json::to_string(&found)?);
    } else {
        for term in &found {
            println!("{}", term);
        }
    }

    if let Some(threshold) = cmd.fail_over_threshold {
        if found.len() > threshold {
            eprintln!(
                "wordwash: {} forbidden term(s) found, exceeding the threshold of {}",
                found.len(),
                threshold
            );
            return Ok(1);
        }
    }

    Ok(0)
}
