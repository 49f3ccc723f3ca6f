//! Configuration management for the access layer
//!
//! This module handles loading and layering of configuration from YAML files
//! and environment variables.

pub mod models;

pub use models::*;

use crate::utils::error::{PolicyError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Console access configuration
    pub console: ConsoleConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PolicyError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let console: ConsoleConfig = serde_yaml::from_str(content)
            .map_err(|e| PolicyError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(Self { console })
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let console = ConsoleConfig::from_env()?;
        Ok(Self { console })
    }

    /// Load the file layer (if any), then apply environment overrides on top
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(path) => Self::from_file(path).await?,
            None => Self::default(),
        };

        base.with_env_overrides()
    }

    /// Apply environment variables over this configuration
    pub fn with_env_overrides(self) -> Result<Self> {
        self.apply_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_lookup<F>(self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            console: self.console.apply_lookup(lookup)?,
        })
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.console.logging
    }

    /// Get ID codec configuration
    pub fn id_codec(&self) -> &IdCodecConfig {
        &self.console.id_codec
    }

    /// Get policy configuration
    pub fn policy(&self) -> &PolicyConfig {
        &self.console.policy
    }

    /// Merge with another configuration (non-default values of `other` take precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.console = self.console.merge(other.console);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.console)
            .map_err(|e| PolicyError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
