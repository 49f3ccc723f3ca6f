//! Password reset authority

use crate::core::models::user::User;
use tracing::debug;

use super::policy::AccessPolicy;
use super::types::Role;

impl AccessPolicy {
    /// Whether `acting` may reset the password of `target`
    ///
    /// - super admins may reset any other account, other super admins included
    /// - organization admins may reset team leads and users of their own organization
    /// - team leads may reset users of their own team
    /// - nobody resets their own account through this path
    /// - every other role is limited to accounts ranked strictly below it
    pub fn can_reset_password(&self, acting: Option<&User>, target: Option<&User>) -> bool {
        let (Some(acting), Some(target)) = (acting, target) else {
            return false;
        };
        let (Some(acting_role), Some(target_role)) = (acting.known_role(), target.known_role())
        else {
            return false;
        };
        if acting.id == target.id {
            debug!(user_id = acting.id, "Self password reset through admin path denied");
            return false;
        }

        match acting_role {
            Role::SuperAdmin => true,
            Role::OrgAdmin => {
                matches!(target_role, Role::TeamLead | Role::User) && acting.same_organization(target)
            }
            Role::TeamLead => target_role == Role::User && acting.same_team(target),
            Role::User => false,
        }
    }
}
