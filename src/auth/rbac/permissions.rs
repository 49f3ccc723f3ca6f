//! Feature permission table and checks

use crate::core::models::user::User;
use tracing::debug;

use super::policy::AccessPolicy;
use super::types::{AccessDecision, Feature, Role};

const ALL_ADMINS: &[Role] = &[Role::SuperAdmin, Role::OrgAdmin];
const ALL_LEADS: &[Role] = &[Role::SuperAdmin, Role::OrgAdmin, Role::TeamLead];

/// Roles allowed to use a feature
pub const fn allowed_roles(feature: Feature) -> &'static [Role] {
    match feature {
        Feature::ManageOrganizations => &[Role::SuperAdmin],
        Feature::ManageOrgUsers => ALL_ADMINS,
        Feature::ManageOrgTeams => ALL_ADMINS,
        Feature::ManageTeamMembers => ALL_LEADS,
        Feature::CreateProjects => ALL_LEADS,
        Feature::ViewAllProjects => ALL_ADMINS,
        Feature::ViewAllTickets => ALL_ADMINS,
        Feature::AssignTickets => ALL_LEADS,
        Feature::DeleteTickets => ALL_ADMINS,
        Feature::DeleteProjects => ALL_ADMINS,
        Feature::CreateTeams => ALL_ADMINS,
        Feature::CreateUsers => ALL_ADMINS,
        Feature::CreateTeamUsers => ALL_LEADS,
    }
}

impl AccessPolicy {
    /// Check whether a user may use the feature named by `feature`
    ///
    /// Unknown tags deny.
    pub fn can_access(&self, user: Option<&User>, feature: &str) -> bool {
        self.evaluate(user, feature).granted
    }

    /// Typed variant of [`AccessPolicy::can_access`]
    pub fn can_access_feature(&self, user: Option<&User>, feature: Feature) -> bool {
        user.and_then(User::known_role)
            .is_some_and(|role| allowed_roles(feature).contains(&role))
    }

    /// Detailed feature check
    pub fn evaluate(&self, user: Option<&User>, feature: &str) -> AccessDecision {
        let denial_reason = match (user, Feature::parse(feature)) {
            (None, _) => Some("No authenticated user".to_string()),
            (Some(_), None) => Some(format!("Unknown feature: {}", feature)),
            (Some(user), Some(parsed)) => match user.known_role() {
                None => Some(format!("Unrecognized role: {}", user.role)),
                Some(role) if allowed_roles(parsed).contains(&role) => None,
                Some(role) => Some(format!("Role {} may not use {}", role, parsed)),
            },
        };

        let decision = AccessDecision {
            granted: denial_reason.is_none(),
            feature: feature.to_string(),
            role: user.map(|u| u.role.clone()),
            denial_reason,
        };

        if let Some(reason) = &decision.denial_reason {
            debug!(feature, reason = %reason, "Access denied");
        } else if self.config.log_decisions {
            debug!(feature, role = ?decision.role, "Access granted");
        }

        decision
    }

    /// Every feature a user may use, in table order
    pub fn features_for(&self, user: Option<&User>) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|feature| self.can_access_feature(user, *feature))
            .collect()
    }
}
