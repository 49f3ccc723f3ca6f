//! Access policy configuration

use serde::{Deserialize, Serialize};

/// Access policy configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Log granted decisions too, not only denials
    #[serde(default)]
    pub log_decisions: bool,
}

impl PolicyConfig {
    /// Merge policy configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.log_decisions {
            self.log_decisions = other.log_decisions;
        }
        self
    }
}
