//! Access policy core functionality

use crate::config::PolicyConfig;
use tracing::debug;

use super::types::RoleTag;

/// Access policy answering role, feature and authority queries
///
/// Holds only immutable configuration, so a single instance can be shared
/// freely between threads.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    /// Policy configuration
    pub(super) config: PolicyConfig,
}

impl AccessPolicy {
    /// Create a new access policy
    pub fn new(config: &PolicyConfig) -> Self {
        debug!(log_decisions = config.log_decisions, "Creating access policy");
        Self {
            config: config.clone(),
        }
    }

    /// Whether `user_role` ranks at least as high as `required_role`
    ///
    /// An unrecognized role on either side denies.
    pub fn has_permission(&self, user_role: &RoleTag, required_role: &RoleTag) -> bool {
        match (user_role.known(), required_role.known()) {
            (Some(user_role), Some(required_role)) => user_role.outranks_or_equals(required_role),
            _ => {
                debug!(
                    user_role = %user_role,
                    required_role = %required_role,
                    "Rank check on unrecognized role denied"
                );
                false
            }
        }
    }
}
