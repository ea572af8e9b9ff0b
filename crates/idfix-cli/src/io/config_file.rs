// crates/idfix-cli/src/io/config_file.rs

use anyhow::{Context, Result};
use idfix_core::Config;

/// Load a TOML config file. Missing keys fall back to `Config::default()`.
pub fn load_toml(path: &str) -> Result<Config> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read config {path}"))?;
    let config: Config =
        toml::from_str(&text).with_context(|| format!("parse config {path}"))?;
    tracing::debug!(path, policy = %config.policy, style = %config.style, "loaded config");
    Ok(config)
}
