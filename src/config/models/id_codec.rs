//! ID obfuscation configuration

use crate::utils::error::PolicyError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// ID codec configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCodecConfig {
    /// Base64 alphabet used for obfuscated IDs
    #[serde(default)]
    pub alphabet: IdAlphabet,
}

impl IdCodecConfig {
    /// Merge ID codec configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.alphabet != IdAlphabet::default() {
            self.alphabet = other.alphabet;
        }
        self
    }
}

/// Base64 alphabet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdAlphabet {
    /// Standard alphabet with padding, identical to the browser's `btoa`
    #[default]
    Standard,
    /// URL-safe alphabet without padding
    UrlSafe,
}

impl FromStr for IdAlphabet {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(IdAlphabet::Standard),
            "url_safe" | "url-safe" | "urlsafe" => Ok(IdAlphabet::UrlSafe),
            _ => Err(PolicyError::config(format!("Invalid ID alphabet: {}", s))),
        }
    }
}
