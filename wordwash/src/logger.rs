// wordwash/src/logger.rs
//! Logger initialization for the CLI.
//!
//! Respects `RUST_LOG` by default; `--quiet` and `--debug` override it.

use log::LevelFilter;

pub fn init_logger(quiet: bool, debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if quiet {
        builder.filter_level(LevelFilter::Off);
    } else if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    // Ignore re-initialization so tests can call this repeatedly.
    let _ = builder.try_init();
}
