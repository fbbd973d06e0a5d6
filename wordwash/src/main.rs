// wordwash/src/main.rs
//! Wordwash entry point.
//!
//! Parses the CLI, initializes logging and dispatches to the selected
//! command.

use anyhow::Result;
use clap::Parser;

use wordwash::cli::{Cli, Commands};
use wordwash::commands;
use wordwash::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    logger::init_logger(args.quiet, args.debug);

    let exit_code = match &args.command {
        Commands::Check(cmd) => commands::check::run(cmd)?,
        Commands::Purify(cmd) => commands::purify::run(cmd)?,
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
