//! Error types for the access layer

use thiserror::Error;

/// Result type alias for the access layer
pub type Result<T> = std::result::Result<T, PolicyError>;

/// Main error type for the access layer
///
/// Policy predicates never produce these; they fail closed instead.
/// Errors only surface at the edges: config files, environment overrides,
/// CLI arguments and strict ID decoding.
#[derive(Error, Debug)]
pub enum PolicyError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Role string that is not one of the known roles
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    /// Feature tag that is not in the feature table
    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    /// Obfuscated ID that does not decode to a number
    #[error("Decode error: {0}")]
    Decode(String),
}
