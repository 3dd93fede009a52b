//! # anonbar-cli
//!
//! Argument parsing, config loading and command execution for the `anonbar` binary.

pub mod cli;

pub use cli::{build_dispatcher, execute, load_config, Cli, Commands};
