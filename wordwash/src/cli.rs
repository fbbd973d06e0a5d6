// wordwash/src/cli.rs
//! This file defines the command-line interface (CLI) for the wordwash
//! application, including all available commands and their arguments.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use wordwash_core::SubstringMode;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "wordwash",
    version = env!("CARGO_PKG_VERSION"),
    about = "Scrub forbidden words from text",
    long_about = "Wordwash is a command-line utility for detecting and redacting forbidden words in text-based data. It scans plain text or JSON documents against a configurable word list and either reports the matches or rewrites them, masking each match or substituting a benign replacement word.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `wordwash` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scans an input for forbidden words and lists the matches without rewriting.
    #[command(about = "Scans an input for forbidden words and lists the matches without rewriting.")]
    Check(CheckCommand),

    /// Rewrites an input, masking or replacing every forbidden word.
    #[command(about = "Rewrites an input, masking or replacing every forbidden word.")]
    Purify(PurifyCommand),
}

/// Arguments shared by both commands for selecting input and word lists.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Path to a custom word list file (YAML), merged over the defaults.
    #[arg(long = "lists", value_name = "FILE", help = "Path to a custom word list file (YAML), merged over the built-in lists.")]
    pub lists: Option<PathBuf>,

    /// Select the substring matching mode.
    #[arg(long = "substrings", value_name = "MODE", default_value = "off", help = "Substring matching mode: 'off' (whole words), 'strict' (anywhere), or 'lite'.")]
    pub substrings: SubstringModeChoice,

    /// Restrict scanning to these keys of a JSON document (comma-separated).
    #[arg(long, value_delimiter = ',', help = "Restrict scanning to these keys of a JSON document (comma-separated).")]
    pub fields: Vec<String>,

    /// Treat the input as a JSON document and scan its string leaves.
    #[arg(long, help = "Treat the input as a JSON document and scan its string leaves.")]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Exit with a non-zero code if the number of matches exceeds this threshold.
    #[arg(long = "fail-over-threshold", value_name = "N", help = "Exit with a non-zero code if the number of detected terms exceeds this threshold.")]
    pub fail_over_threshold: Option<usize>,

    /// Print the matches as a JSON array instead of one per line.
    #[arg(long = "json-stdout", help = "Print the matches as a JSON array instead of one per line.")]
    pub json_stdout: bool,
}

/// Arguments for the `purify` command.
#[derive(Parser, Debug)]
pub struct PurifyCommand {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Write rewritten output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Substitute replacement words instead of masking.
    #[arg(long, help = "Substitute replacement words instead of masking.")]
    pub replace: bool,

    /// With --replace: map each distinct term to a stable replacement word.
    #[arg(long, requires = "replace", help = "Map each distinct matched term to the same replacement word for the whole run.")]
    pub map: bool,

    /// The character used to fill the interior of masked matches.
    #[arg(long = "obscure-symbol", value_name = "CHAR", default_value_t = wordwash_core::DEFAULT_OBSCURE_SYMBOL, help = "The character used to fill the interior of masked matches.")]
    pub obscure_symbol: char,

    /// Suppress the match summary printed to stderr.
    #[arg(long = "no-summary", help = "Suppress the match summary printed to stderr.")]
    pub no_summary: bool,
}

/// Enum for selecting the substring matching mode.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum SubstringModeChoice {
    /// Whole-word matches only.
    Off,
    /// Matches anywhere, including inside larger words.
    Strict,
    /// Whole-word matching plus the curated substring-only list.
    Lite,
}

impl From<SubstringModeChoice> for SubstringMode {
    fn from(choice: SubstringModeChoice) -> Self {
        match choice {
            SubstringModeChoice::Off => SubstringMode::Off,
            SubstringModeChoice::Strict => SubstringMode::Strict,
            SubstringModeChoice::Lite => SubstringMode::Lite,
        }
    }
}
