//! Loading and saving the site configuration file.

use std::path::Path;

use anyhow::{Context, Result};
use bistro_cart::CartConfig;

/// File names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["bistro.toml", ".bistro.toml", "bistro.json"];

/// Load config from a `.toml` or `.json` file.
pub fn load(path: &Path) -> Result<CartConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    if is_json(path) {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }
}

/// Default bistro.toml contents.
pub fn generate_default_config() -> Result<String> {
    let body = toml::to_string_pretty(&CartConfig::default())
        .context("Failed to serialize default config")?;
    Ok(format!("# Bistro site configuration\n\n{}", body))
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bistro.toml");
        std::fs::write(&path, generate_default_config().unwrap()).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, CartConfig::default());
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bistro.json");
        let config = CartConfig {
            delivery_fee: "3.49".to_string(),
            ..CartConfig::default()
        };
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.delivery_fee, "3.49");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bistro.toml");
        std::fs::write(
            &path,
            r#"
delivery_fee = "1.50"

[glyphs]
"1" = "🌯"
"#,
        )
        .unwrap();

        let config = load(&path).unwrap();
        let settings = config.settings().unwrap();
        assert_eq!(settings.delivery_fee.amount_cents, 150);
        assert_eq!(config.menu.len(), 8);
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = load(Path::new("/nonexistent/bistro.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read config file"));
    }
}
