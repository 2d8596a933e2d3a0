//! Command-line client for the Celestica vector service
//!
//! ```text
//! celestica insert --id 10 --vector 1,2 --id 11 --vector 3,4
//! celestica search --vector 1,2 --knbn 5 --ef 50
//! ```
//!
//! The service address comes from `--url`, then `CELESTICA_URL`, then
//! `GRPC_SERVER_HOST` / `GRPC_PORT`.

pub mod commands;
pub mod config;

use celestica::CelesticaClient;
use clap::Parser;
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::{Environment, FromEnv};
use eyre::{Result, WrapErr};
use tracing::debug;

pub use commands::{Cli, Command};
pub use config::CliConfig;

/// Parse arguments, run one command and print its output
pub async fn run() -> Result<()> {
    install_color_eyre();

    let cli = Cli::parse();

    let environment = Environment::from_env();
    init_tracing(&environment);

    let config = CliConfig::from_env()
        .wrap_err("Failed to load client configuration")?
        .with_overrides(cli.url.clone(), cli.timeout_secs);
    debug!(url = %config.url, "Using vector service");

    let client = CelesticaClient::with_config(&config.url, config.client_config())
        .wrap_err_with(|| format!("Invalid vector service address: {}", config.url))?;

    let output = commands::execute(&client, cli.command).await?;
    print!("{output}");

    Ok(())
}
