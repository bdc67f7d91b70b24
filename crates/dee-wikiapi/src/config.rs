use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use dee_wikiapi::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};

use crate::{cli::EndpointArgs, models::AppError};

pub const ENDPOINT_ENV: &str = "WIKI_ENDPOINT";
pub const ENDPOINT_KEY: &str = "wiki.endpoint";

/// Serializable config stored in ~/.config/dee-wikiapi/config.toml
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dee-wikiapi")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).context("invalid config.toml")
}

pub fn save_config(cfg: &AppConfig) -> Result<()> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(cfg).context("failed to serialize config")?;
    fs::write(&path, content).with_context(|| format!("failed to write config {}", path.display()))
}

/// Flag, then language shorthand, then environment, then config file, then default.
pub fn resolve_endpoint(args: &EndpointArgs) -> Result<String, AppError> {
    if let Some(endpoint) = &args.endpoint {
        return Ok(endpoint.clone());
    }
    if let Some(lang) = &args.lang {
        validate_lang(lang)?;
        return Ok(format!("https://{lang}.wikipedia.org/w/api.php"));
    }
    if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
        if !endpoint.trim().is_empty() {
            return Ok(endpoint);
        }
    }
    let cfg = load_config().map_err(AppError::Config)?;
    Ok(cfg
        .endpoint
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()))
}

fn validate_lang(lang: &str) -> Result<(), AppError> {
    let valid = !lang.is_empty() && lang.chars().all(|ch| ch.is_ascii_alphabetic() || ch == '-');
    if valid {
        Ok(())
    } else {
        Err(AppError::InvalidLanguage)
    }
}
