//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;
use crate::application::services::{Labels, RunPolicy};

/// Remote configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub invoker: InvokerConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct InvokerConfig {
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub use_off_slot: bool,
}

impl InvokerConfig {
    /// Command-line switches; `None` keeps the configured value
    pub fn override_with(&mut self, strict: Option<bool>, use_off_slot: Option<bool>) {
        if let Some(strict) = strict {
            self.strict = strict;
        }
        if let Some(use_off_slot) = use_off_slot {
            self.use_off_slot = use_off_slot;
        }
    }

    pub fn policy(&self) -> RunPolicy {
        RunPolicy::default()
            .strict(self.strict)
            .use_off_slot(self.use_off_slot)
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Io(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    pub fn save(&self, path: impl Into<PathBuf>) -> Result<(), ConfigError> {
        let path = path.into();
        std::fs::write(&path, self.to_yaml()?)
            .map_err(|e| ConfigError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }

    /// Load `path` if it is there and readable, otherwise start from defaults.
    /// `HOME_REMOTE_*` environment variables are applied on top either way.
    pub fn load_or_default(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Self::load_or_default_with(path.into(), |key| std::env::var(key).ok())
    }

    fn load_or_default_with<F>(path: PathBuf, var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            Config::default()
        } else {
            Self::load(&path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            })
        };

        config.with_vars(var)
    }

    fn with_vars<F>(mut self, var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = var("HOME_REMOTE_STRICT") {
            self.invoker.strict = parse_flag("HOME_REMOTE_STRICT", &value)?;
        }

        if let Some(value) = var("HOME_REMOTE_USE_OFF_SLOT") {
            self.invoker.use_off_slot = parse_flag("HOME_REMOTE_USE_OFF_SLOT", &value)?;
        }

        Ok(self)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidValue(format!("{}={}", key, other))),
    }
}
