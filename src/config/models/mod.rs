//! Configuration data models
//!
//! This module defines all configuration structures used by the access layer.

pub mod console;
pub mod id_codec;
pub mod logging;
pub mod policy;

// Re-export all configuration types
pub use console::*;
pub use id_codec::*;
pub use logging::*;
pub use policy::*;

/// Parse a boolean flag the way the environment layer accepts them
pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
