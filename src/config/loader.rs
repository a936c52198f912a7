// Configuration loader
// Loads account and token from ~/.kiss/config.toml or environment variables

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::settings::{Config, DEFAULT_USER};

/// TOML shape of ~/.kiss/config.toml. Both keys are optional.
#[derive(serde::Deserialize, Default)]
struct TomlConfig {
    user: Option<String>,
    token: Option<String>,
}

/// Load configuration from the kiss config file or environment.
///
/// Precedence per field: config file > environment (`KISS_USER`,
/// `GITHUB_TOKEN`) > built-in default. A missing file is not an error.
pub fn load_config() -> Result<Config> {
    let toml_config = match dirs::home_dir() {
        Some(home) => read_config_file(&home.join(".kiss/config.toml"))?,
        None => TomlConfig::default(),
    };

    let user = toml_config
        .user
        .or_else(|| std::env::var("KISS_USER").ok().filter(|u| !u.is_empty()))
        .unwrap_or_else(|| DEFAULT_USER.to_string());

    let token = toml_config
        .token
        .or_else(|| std::env::var("GITHUB_TOKEN").ok())
        .filter(|t| !t.is_empty());

    Ok(Config { user, token })
}

fn read_config_file(path: &Path) -> Result<TomlConfig> {
    if !path.exists() {
        return Ok(TomlConfig::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}
