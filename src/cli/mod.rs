//! Command-line interface for the mentor gateway.
//!
//! Provides one subcommand per generation task plus document export, for
//! exercising the gateway outside the web front-end.

mod commands;

pub use commands::{parse_cli, run, run_with_cli, Cli};
