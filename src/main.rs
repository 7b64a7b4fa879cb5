//! Navtree CLI entry point.
//!
//! Loads configuration, initializes logging, and dispatches the parsed
//! command.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use navtree_core::config::AppConfig;
use navtree_core::error::AppError;

mod commands;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(
        "Loaded config from '{}' (env: {})",
        cli.config,
        config_env(&cli).as_deref().unwrap_or("none")
    );

    if let Err(e) = cli.execute(&config).await {
        tracing::error!("Command failed: {}", e);
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Load configuration from file, environment overlay and variables.
fn load_configuration(cli: &Cli) -> Result<AppConfig, AppError> {
    AppConfig::load(&cli.config, config_env(cli).as_deref())
}

/// Environment overlay name from the command line or NAVTREE_ENV.
fn config_env(cli: &Cli) -> Option<String> {
    cli.env
        .clone()
        .or_else(|| std::env::var("NAVTREE_ENV").ok())
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
