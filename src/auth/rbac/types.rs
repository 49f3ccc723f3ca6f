//! RBAC type definitions

use crate::utils::error::PolicyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Console role, ordered by privilege
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Platform-wide administrator
    SuperAdmin,
    /// Administrator of a single organization
    OrgAdmin,
    /// Lead of a team inside an organization
    TeamLead,
    /// Regular member
    User,
}

impl Role {
    /// All roles, most privileged first
    pub const ALL: [Role; 4] = [Role::SuperAdmin, Role::OrgAdmin, Role::TeamLead, Role::User];

    /// Privilege rank. Higher outranks lower; no two roles share a rank.
    pub const fn rank(self) -> u8 {
        match self {
            Role::SuperAdmin => 4,
            Role::OrgAdmin => 3,
            Role::TeamLead => 2,
            Role::User => 1,
        }
    }

    /// Wire tag, as the backend sends it
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::OrgAdmin => "ORG_ADMIN",
            Role::TeamLead => "TEAM_LEAD",
            Role::User => "USER",
        }
    }

    /// Human-readable label
    pub const fn display_name(self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::OrgAdmin => "Organization Admin",
            Role::TeamLead => "Team Lead",
            Role::User => "User",
        }
    }

    /// Badge colour used next to the role label
    pub const fn color(self) -> RoleColor {
        match self {
            Role::SuperAdmin => RoleColor::Error,
            Role::OrgAdmin => RoleColor::Primary,
            Role::TeamLead => RoleColor::Secondary,
            Role::User => RoleColor::Default,
        }
    }

    /// Whether `self` ranks at least as high as `other`
    pub const fn outranks_or_equals(self, other: Role) -> bool {
        self.rank() >= other.rank()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUPER_ADMIN" => Ok(Role::SuperAdmin),
            "ORG_ADMIN" => Ok(Role::OrgAdmin),
            "TEAM_LEAD" => Ok(Role::TeamLead),
            "USER" => Ok(Role::User),
            _ => Err(PolicyError::invalid_role(s)),
        }
    }
}

/// A role value as received from an untyped boundary
///
/// Deserialization never fails on an unknown role string; the raw value is
/// kept in [`RoleTag::Unrecognized`] so it can be echoed back for display
/// while every access predicate denies it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoleTag {
    /// One of the four console roles
    Known(Role),
    /// Anything else, verbatim
    Unrecognized(String),
}

impl RoleTag {
    /// Parse a raw role string, keeping unknown values
    pub fn parse(raw: &str) -> Self {
        raw.parse::<Role>()
            .map(RoleTag::Known)
            .unwrap_or_else(|_| RoleTag::Unrecognized(raw.to_string()))
    }

    /// The role, if recognized
    pub fn known(&self) -> Option<Role> {
        match self {
            RoleTag::Known(role) => Some(*role),
            RoleTag::Unrecognized(_) => None,
        }
    }

    /// Raw value, as it would appear on the wire
    pub fn as_str(&self) -> &str {
        match self {
            RoleTag::Known(role) => role.as_str(),
            RoleTag::Unrecognized(raw) => raw,
        }
    }
}

impl From<Role> for RoleTag {
    fn from(role: Role) -> Self {
        RoleTag::Known(role)
    }
}

impl From<String> for RoleTag {
    fn from(raw: String) -> Self {
        match raw.parse::<Role>() {
            Ok(role) => RoleTag::Known(role),
            Err(_) => RoleTag::Unrecognized(raw),
        }
    }
}

impl From<&str> for RoleTag {
    fn from(raw: &str) -> Self {
        RoleTag::parse(raw)
    }
}

impl From<RoleTag> for String {
    fn from(tag: RoleTag) -> Self {
        match tag {
            RoleTag::Known(role) => role.as_str().to_string(),
            RoleTag::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for RoleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge colour tags understood by the UI kit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleColor {
    Error,
    Primary,
    Secondary,
    Default,
}

impl RoleColor {
    pub const fn as_str(self) -> &'static str {
        match self {
            RoleColor::Error => "error",
            RoleColor::Primary => "primary",
            RoleColor::Secondary => "secondary",
            RoleColor::Default => "default",
        }
    }
}

impl fmt::Display for RoleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gated console capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    ManageOrganizations,
    ManageOrgUsers,
    ManageOrgTeams,
    ManageTeamMembers,
    CreateProjects,
    ViewAllProjects,
    ViewAllTickets,
    AssignTickets,
    DeleteTickets,
    DeleteProjects,
    CreateTeams,
    CreateUsers,
    CreateTeamUsers,
}

impl Feature {
    pub const ALL: [Feature; 13] = [
        Feature::ManageOrganizations,
        Feature::ManageOrgUsers,
        Feature::ManageOrgTeams,
        Feature::ManageTeamMembers,
        Feature::CreateProjects,
        Feature::ViewAllProjects,
        Feature::ViewAllTickets,
        Feature::AssignTickets,
        Feature::DeleteTickets,
        Feature::DeleteProjects,
        Feature::CreateTeams,
        Feature::CreateUsers,
        Feature::CreateTeamUsers,
    ];

    /// Feature tag as used by the UI
    pub const fn as_str(self) -> &'static str {
        match self {
            Feature::ManageOrganizations => "manage_organizations",
            Feature::ManageOrgUsers => "manage_org_users",
            Feature::ManageOrgTeams => "manage_org_teams",
            Feature::ManageTeamMembers => "manage_team_members",
            Feature::CreateProjects => "create_projects",
            Feature::ViewAllProjects => "view_all_projects",
            Feature::ViewAllTickets => "view_all_tickets",
            Feature::AssignTickets => "assign_tickets",
            Feature::DeleteTickets => "delete_tickets",
            Feature::DeleteProjects => "delete_projects",
            Feature::CreateTeams => "create_teams",
            Feature::CreateUsers => "create_users",
            Feature::CreateTeamUsers => "create_team_users",
        }
    }

    /// Look up a tag; `None` for anything outside the table
    pub fn parse(tag: &str) -> Option<Self> {
        Feature::ALL.into_iter().find(|f| f.as_str() == tag)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::parse(s).ok_or_else(|| PolicyError::unknown_feature(s))
    }
}

/// Detailed result of a feature check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessDecision {
    /// Whether access is granted
    pub granted: bool,
    /// Feature tag that was requested, verbatim
    pub feature: String,
    /// Role that was evaluated, if a user was present
    pub role: Option<RoleTag>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}
