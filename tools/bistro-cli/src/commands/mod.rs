//! CLI command implementations.

pub mod config;
pub mod menu;
pub mod replay;

use clap::{Args, Subcommand};

/// Arguments for the replay command.
#[derive(Args)]
pub struct ReplayArgs {
    /// Script of actions (.toml or .json).
    pub script: String,

    /// Print the rendered cart drawer markup.
    #[arg(long)]
    pub html: bool,

    /// Scrollbar width in pixels compensated while the cart is open.
    #[arg(long, default_value = "0")]
    pub scrollbar_width: u32,
}

/// Arguments for the menu command.
#[derive(Args)]
pub struct MenuArgs {
    /// Only show this category ("all" shows everything).
    #[arg(long, default_value = "all")]
    pub category: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
