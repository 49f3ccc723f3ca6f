//! Core user types

use crate::auth::rbac::{Role, RoleTag};
use serde::{Deserialize, Serialize};

/// Backend user identifier
pub type UserId = u64;
/// Backend organization identifier
pub type OrganizationId = u64;
/// Backend team identifier
pub type TeamId = u64;

/// Immutable snapshot of an authenticated user
///
/// Created at login or session load and replaced wholesale on role switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: UserId,
    /// Username
    pub username: String,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Role as sent by the backend; may be unrecognized
    pub role: RoleTag,
    /// Organization the user belongs to
    #[serde(default)]
    pub organization_id: Option<OrganizationId>,
    /// Team the user belongs to
    #[serde(default)]
    pub team_id: Option<TeamId>,
}

impl User {
    /// Create a new user snapshot without organization or team
    pub fn new(id: UserId, username: impl Into<String>, role: impl Into<RoleTag>) -> Self {
        Self {
            id,
            username: username.into(),
            email: None,
            role: role.into(),
            organization_id: None,
            team_id: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_organization(mut self, organization_id: OrganizationId) -> Self {
        self.organization_id = Some(organization_id);
        self
    }

    pub fn with_team(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }

    /// The user's role, if it is one of the known roles
    pub fn known_role(&self) -> Option<Role> {
        self.role.known()
    }

    /// Both users belong to the same organization. Missing IDs never match.
    pub fn same_organization(&self, other: &User) -> bool {
        matches!(
            (self.organization_id, other.organization_id),
            (Some(a), Some(b)) if a == b
        )
    }

    /// Both users belong to the same team of the same organization
    pub fn same_team(&self, other: &User) -> bool {
        self.same_organization(other)
            && matches!((self.team_id, other.team_id), (Some(a), Some(b)) if a == b)
    }
}
