//! CLI command implementations

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;
use crate::services::{Fixtures, Stores};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub http: HttpServerConfig,

    /// Seed data, relative to the configuration file
    #[serde(default)]
    pub fixtures: Option<PathBuf>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let mut config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        if let Some(fixtures) = config.fixtures.take() {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            config.fixtures = Some(base.join(fixtures));
        }

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.http.host.trim().is_empty() {
            return Err(CliError::config_error("host must not be empty"));
        }

        if self.http.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        if let Some(origin) = self
            .http
            .cors_origins
            .iter()
            .find(|o| !(o.starts_with("http://") || o.starts_with("https://")))
        {
            return Err(CliError::config_error(format!(
                "Invalid cors origin: '{}'. Must start with http:// or https://",
                origin
            )));
        }

        Ok(())
    }

    /// Server configuration, with the port optionally overridden
    pub fn http_config(&self, port: Option<u16>) -> HttpServerConfig {
        let mut http = self.http.clone();
        if let Some(port) = port {
            http.port = port;
        }
        http
    }

    /// Reads the fixtures file, or empty fixtures when none is configured
    pub fn load_fixtures(&self) -> CliResult<Fixtures> {
        let Some(path) = &self.fixtures else {
            return Ok(Fixtures::default());
        };

        let content = fs::read_to_string(path).map_err(|e| {
            CliError::fixtures_error(format!("Failed to read {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&content)
            .map_err(|e| CliError::fixtures_error(format!("Invalid fixtures JSON: {}", e)))
    }
}

/// Parse arguments and run the command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::Check { config } => check(&config),
    }
}

/// Load configuration and fixtures, then serve until the server stops
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let stores = Stores::from_fixtures(config.load_fixtures()?)
        .map_err(|e| CliError::fixtures_error(format!("Failed to seed stores: {}", e)))?;

    let orders = stores.orders.len().to_string();
    let shipments = stores.shipments.len().to_string();
    Logger::info(
        "BOOT_COMPLETE",
        &[("orders", orders.as_str()), ("shipments", shipments.as_str())],
    );

    let server = HttpServer::new(config.http_config(port), &stores);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Validate configuration and fixtures; prints a JSON summary to stdout
pub fn check(config_path: &Path) -> CliResult<()> {
    let summary = summarize(config_path)?;
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

fn summarize(config_path: &Path) -> CliResult<serde_json::Value> {
    let config = Config::load(config_path)?;
    let fixtures = config.load_fixtures()?;

    Ok(json!({
        "addr": config.http.socket_addr(),
        "orders": fixtures.orders.len(),
        "order_items": fixtures.order_items.len(),
        "product_categories": fixtures.product_categories.len(),
        "shipments": fixtures.shipments.len(),
        "shipment_items": fixtures.shipment_items.len(),
    }))
}
