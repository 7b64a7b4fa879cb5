//! Configuration management CLI commands.

use clap::{Args, Subcommand};
use validator::Validate;

use crate::output::{self, OutputFormat};
use navtree_core::config::AppConfig;
use navtree_core::error::AppError;
use navtree_service::BuildOptions;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the merged configuration
    Show,
    /// Check that the tree defaults form valid build options
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => output::print_item(config, format),
        ConfigCommand::Validate => {
            if let Err(e) = BuildOptions::from_config(&config.tree).validate() {
                let err = AppError::from(e);
                output::print_error(&format!("Configuration invalid: {}", err));
                return Err(err);
            }
            output::print_success(&format!("Configuration '{}' is valid", config_path));
            output::print_kv("Depth", &config.tree.depth.to_string());
            output::print_kv("Checkboxes", &config.tree.checkbox_mode_enabled.to_string());
            output::print_kv(
                "Navigate URL",
                config.tree.navigate_url_template.as_deref().unwrap_or("-"),
            );
            output::print_kv(
                "Anonymous browsing",
                &config.access.allow_anonymous_browsing.to_string(),
            );
        }
    }

    Ok(())
}
