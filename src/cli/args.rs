//! CLI argument definitions using clap
//!
//! Commands:
//! - commerce_api serve --config <path> [--port <port>]
//! - commerce_api check --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Commerce API - orders and shipments over HTTP
#[derive(Parser, Debug)]
#[command(name = "commerce_api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load fixtures and serve the HTTP API
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./commerce_api.json")]
        config: PathBuf,

        /// Overrides the port from the configuration file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate configuration and fixtures, then print a summary
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./commerce_api.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
