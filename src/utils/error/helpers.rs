//! Helper functions for creating specific error types

use super::types::PolicyError;

impl PolicyError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn invalid_role<S: Into<String>>(role: S) -> Self {
        Self::InvalidRole(role.into())
    }

    pub fn unknown_feature<S: Into<String>>(feature: S) -> Self {
        Self::UnknownFeature(feature.into())
    }

    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode(message.into())
    }

    /// Whether the error was caused by caller input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidRole(_) | Self::UnknownFeature(_) | Self::Decode(_)
        )
    }
}
