//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{self, generate_default_config, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("source", &path.display().to_string()),
        None => ctx.output.kv("source", "built-in defaults"),
    }
    ctx.output.kv("currency", ctx.config.currency.code());
    ctx.output.kv("delivery_fee", &ctx.config.delivery_fee);
    ctx.output.kv("pulse_ms", &ctx.config.pulse_ms.to_string());
    ctx.output
        .kv("toast_capacity", &ctx.config.toast_capacity.to_string());
    ctx.output.kv("menu items", &ctx.config.menu.len().to_string());
    ctx.output
        .kv("testimonials", &ctx.config.testimonials.len().to_string());

    if !ctx.config.glyphs.is_empty() {
        ctx.output.info("");
        ctx.output.info("[glyphs]");
        for (id, glyph) in &ctx.config.glyphs {
            ctx.output.kv(id, glyph);
        }
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config()?)?;
    ctx.output
        .success(&format!("Created {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    if let Some(path) = &ctx.config_path {
        // Re-read so edits since startup are validated too.
        config::load(path)?.validate()?;
    } else {
        ctx.config.validate()?;
    }

    let menu = ctx.config.menu()?;
    ctx.output.success("Configuration is valid");
    ctx.output.kv("menu items", &menu.len().to_string());
    ctx.output
        .kv("categories", &menu.categories().len().to_string());

    Ok(())
}
