//! CLI module
//!
//! - serve: load configuration and fixtures, then serve the HTTP API
//! - check: validate configuration and fixtures without serving

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check, run, run_command, serve, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
