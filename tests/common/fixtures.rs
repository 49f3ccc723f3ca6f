//! Test fixtures and data factories
//!
//! Provides factory methods for creating user snapshots with sensible defaults.
//! All factories create real objects, not mocks.

use std::sync::atomic::{AtomicU64, Ordering};
use tracker_access::{Role, User};

static NEXT_ID: AtomicU64 = AtomicU64::new(1000);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Factory for creating test users
pub struct UserFactory;

impl UserFactory {
    /// Platform administrator without organization
    pub fn super_admin() -> User {
        let id = next_id();
        User::new(id, format!("root_{}", id), Role::SuperAdmin)
            .with_email(format!("root-{}@example.com", id))
    }

    /// Organization administrator
    pub fn org_admin(organization_id: u64) -> User {
        let id = next_id();
        User::new(id, format!("admin_{}", id), Role::OrgAdmin).with_organization(organization_id)
    }

    /// Team lead inside an organization
    pub fn team_lead(organization_id: u64, team_id: u64) -> User {
        let id = next_id();
        User::new(id, format!("lead_{}", id), Role::TeamLead)
            .with_organization(organization_id)
            .with_team(team_id)
    }

    /// Regular member of a team
    pub fn member(organization_id: u64, team_id: u64) -> User {
        let id = next_id();
        User::new(id, format!("user_{}", id), Role::User)
            .with_organization(organization_id)
            .with_team(team_id)
    }

    /// User whose role the console does not know, as decoded from backend JSON
    pub fn with_unknown_role(raw_role: &str) -> User {
        let json = format!(
            r#"{{"id": {}, "username": "stranger", "role": "{}", "organization_id": 1}}"#,
            next_id(),
            raw_role
        );
        serde_json::from_str(&json).expect("fixture JSON is valid")
    }
}
