// wordwash/src/lib.rs
//! # Wordwash CLI
//!
//! This crate provides the command-line interface for the wordwash engine:
//! a `check` command that reports forbidden terms and a `purify` command that
//! rewrites them, over plain text or JSON documents.

pub mod cli;
pub mod commands;
pub mod logger;
