//! Configuration file support for hr-orgchart.
//!
//! Provides YAML-based configuration through `orgchart.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::error::OrgChartError;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "orgchart.config.yml";

/// Default environment variable holding the bearer token.
pub const DEFAULT_TOKEN_ENV: &str = "HR_API_TOKEN";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    /// Name of the environment variable holding the bearer token.
    pub token_env: Option<String>,
    pub all_departments: Option<bool>,
    pub include_sub_depts: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    pub fn token_env(&self) -> &str {
        self.token_env.as_deref().unwrap_or(DEFAULT_TOKEN_ENV)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Err(OrgChartError::ConfigNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| OrgChartError::ConfigParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref base_url) = config.base_url {
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(OrgChartError::InvalidBaseUrl {
                url: base_url.clone(),
                reason: "Unsupported scheme in config file".to_string(),
            }
            .into());
        }
    }

    if let Some(ref token_env) = config.token_env {
        if token_env.trim().is_empty() {
            anyhow::bail!(
                "Invalid config: token_env must not be empty.\n\n\
                 💡 Hint: Set token_env to the name of the environment variable holding the bearer token."
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
