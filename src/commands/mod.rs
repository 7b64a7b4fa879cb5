//! CLI command definitions and dispatch.

pub mod config;
pub mod tree;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use navtree_core::config::AppConfig;
use navtree_core::error::AppError;

/// Navtree: permission-filtered album navigation trees
#[derive(Debug, Parser)]
#[command(name = "navtree", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Environment overlay (`config/{env}.toml`), falls back to NAVTREE_ENV
    #[arg(short, long)]
    pub env: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build a navigation tree from a gallery fixture
    Tree(tree::TreeArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Tree(args) => tree::execute(args, config, self.format).await,
            Commands::Config(args) => config::execute(args, config, &self.config, self.format),
        }
    }
}
