//! Role display metadata and creation authority

use crate::core::models::user::User;
use std::borrow::Cow;

use super::policy::AccessPolicy;
use super::types::{Role, RoleColor, RoleTag};

/// Roles a holder of `role` may assign to newly created accounts
///
/// Not derived from rank: an organization admin may create peers, a team
/// lead may not.
pub const fn creatable_roles_for(role: Role) -> &'static [Role] {
    match role {
        Role::SuperAdmin => &[Role::SuperAdmin, Role::OrgAdmin, Role::TeamLead, Role::User],
        Role::OrgAdmin => &[Role::OrgAdmin, Role::TeamLead, Role::User],
        Role::TeamLead => &[Role::User],
        Role::User => &[],
    }
}

impl AccessPolicy {
    /// Whether `user` may create an account with `target_role`
    pub fn can_create_role(&self, user: Option<&User>, target_role: &RoleTag) -> bool {
        let (Some(role), Some(target)) = (user.and_then(User::known_role), target_role.known())
        else {
            return false;
        };
        creatable_roles_for(role).contains(&target)
    }

    /// Roles offered in the "create user" role picker, most privileged first
    pub fn creatable_roles(&self, user: Option<&User>) -> Vec<Role> {
        user.and_then(User::known_role)
            .map(|role| creatable_roles_for(role).to_vec())
            .unwrap_or_default()
    }

    /// Label for a role; unrecognized roles echo their raw value
    pub fn role_display_name<'a>(&self, role: &'a RoleTag) -> Cow<'a, str> {
        match role {
            RoleTag::Known(role) => Cow::Borrowed(role.display_name()),
            RoleTag::Unrecognized(raw) => Cow::Borrowed(raw.as_str()),
        }
    }

    /// Badge colour for a role; unrecognized roles get the neutral colour
    pub fn role_color(&self, role: &RoleTag) -> RoleColor {
        role.known().map_or(RoleColor::Default, Role::color)
    }
}
