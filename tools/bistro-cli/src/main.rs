//! Bistro CLI - Command line driver for the Bistro cart core.
//!
//! Commands:
//! - `bistro replay` - Run a scripted sequence of page actions against a cart
//! - `bistro menu` - List the menu, optionally filtered by category
//! - `bistro config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, MenuArgs, ReplayArgs};

/// Bistro CLI - Replay cart sessions and inspect site configuration
#[derive(Parser)]
#[command(name = "bistro")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a script of cart actions
    Replay(ReplayArgs),

    /// List menu items
    Menu(MenuArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Replay(args) => commands::replay::run(args, &ctx),
        Commands::Menu(args) => commands::menu::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins, otherwise `warn` (or `debug` with `--verbose`).
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_category_is_long_only() {
        let cli = Cli::try_parse_from(["bistro", "menu", "--category", "pizza"]).unwrap();
        match cli.command {
            Commands::Menu(args) => assert_eq!(args.category, "pizza"),
            _ => panic!("expected menu command"),
        }

        assert!(Cli::try_parse_from(["bistro", "menu", "-k", "pizza"]).is_err());
    }

    #[test]
    fn test_short_c_is_config_path() {
        let cli = Cli::try_parse_from(["bistro", "menu", "-c", "site.toml"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some("site.toml"));
    }
}
