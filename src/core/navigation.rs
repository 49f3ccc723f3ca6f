//! Role-gated console navigation
//!
//! The side menu and the route guard share one table, so a link is shown
//! exactly when following it would be allowed.

use crate::auth::rbac::{AccessPolicy, Feature};
use crate::core::models::user::User;
use serde::Serialize;

/// Side-menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavItem {
    Dashboard,
    Organizations,
    Users,
    Teams,
    Projects,
    Tickets,
}

impl NavItem {
    /// Menu order
    pub const ALL: [NavItem; 6] = [
        NavItem::Dashboard,
        NavItem::Organizations,
        NavItem::Users,
        NavItem::Teams,
        NavItem::Projects,
        NavItem::Tickets,
    ];

    pub const fn route(self) -> &'static str {
        match self {
            NavItem::Dashboard => "/dashboard",
            NavItem::Organizations => "/organizations",
            NavItem::Users => "/users",
            NavItem::Teams => "/teams",
            NavItem::Projects => "/projects",
            NavItem::Tickets => "/tickets",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::Organizations => "Organizations",
            NavItem::Users => "Users",
            NavItem::Teams => "Teams",
            NavItem::Projects => "Projects",
            NavItem::Tickets => "Tickets",
        }
    }

    /// Feature required to see the item, if any
    pub const fn gate(self) -> Option<Feature> {
        match self {
            NavItem::Organizations => Some(Feature::ManageOrganizations),
            NavItem::Users => Some(Feature::ManageOrgUsers),
            NavItem::Teams => Some(Feature::ManageTeamMembers),
            NavItem::Dashboard | NavItem::Projects | NavItem::Tickets => None,
        }
    }

    /// Item owning `route`. Sub-paths such as `/tickets/NDI=` belong to their parent.
    pub fn for_route(route: &str) -> Option<Self> {
        NavItem::ALL.into_iter().find(|item| {
            route
                .strip_prefix(item.route())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
    }
}

/// Menu builder over an access policy
#[derive(Debug, Clone, Copy)]
pub struct Navigation<'a> {
    policy: &'a AccessPolicy,
}

impl<'a> Navigation<'a> {
    pub fn new(policy: &'a AccessPolicy) -> Self {
        Self { policy }
    }

    /// Whether `user` may see `item`
    ///
    /// Ungated items still require a signed-in user with a recognized role.
    pub fn is_visible(&self, user: Option<&User>, item: NavItem) -> bool {
        let Some(user) = user.filter(|u| u.known_role().is_some()) else {
            return false;
        };
        match item.gate() {
            Some(feature) => self.policy.can_access_feature(Some(user), feature),
            None => true,
        }
    }

    /// Menu items visible to `user`, in menu order
    pub fn visible_items(&self, user: Option<&User>) -> Vec<NavItem> {
        NavItem::ALL
            .into_iter()
            .filter(|item| self.is_visible(user, *item))
            .collect()
    }

    /// Route guard. Unknown routes deny.
    pub fn can_visit(&self, user: Option<&User>, route: &str) -> bool {
        NavItem::for_route(route).is_some_and(|item| self.is_visible(user, item))
    }
}
