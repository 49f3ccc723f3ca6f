//! Top-level console access configuration

use super::{IdCodecConfig, LoggingConfig, PolicyConfig, parse_flag};
use crate::utils::error::{PolicyError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "TRACKER_LOG_LEVEL";
/// Environment variable overriding the log format
pub const ENV_LOG_FORMAT: &str = "TRACKER_LOG_FORMAT";
/// Environment variable overriding the ID alphabet
pub const ENV_ID_ALPHABET: &str = "TRACKER_ID_ALPHABET";
/// Environment variable enabling grant logging
pub const ENV_LOG_DECISIONS: &str = "TRACKER_LOG_DECISIONS";

/// Console access configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// ID codec configuration
    #[serde(default)]
    pub id_codec: IdCodecConfig,
    /// Access policy configuration
    #[serde(default)]
    pub policy: PolicyConfig,
}

impl ConsoleConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().apply_lookup(lookup)
    }

    /// Override the keys present in `lookup`, leaving every other value as is
    ///
    /// A present key always wins, even when it names the default value.
    pub fn apply_lookup<F>(self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Applying environment overrides");

        let mut config = self;

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.logging.level = level.parse()?;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            config.logging.format = format.parse()?;
        }
        if let Some(alphabet) = lookup(ENV_ID_ALPHABET) {
            config.id_codec.alphabet = alphabet.parse()?;
        }
        if let Some(flag) = lookup(ENV_LOG_DECISIONS) {
            config.policy.log_decisions = parse_flag(&flag).ok_or_else(|| {
                PolicyError::config(format!("Invalid {} value: {}", ENV_LOG_DECISIONS, flag))
            })?;
        }

        Ok(config)
    }

    /// Merge configurations (non-default values of `other` take precedence)
    pub fn merge(self, other: Self) -> Self {
        Self {
            logging: self.logging.merge(other.logging),
            id_codec: self.id_codec.merge(other.id_codec),
            policy: self.policy.merge(other.policy),
        }
    }
}
