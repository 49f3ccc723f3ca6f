//! Session context
//!
//! The application shell owns one [`SessionContext`] and shares it by `Arc`.
//! It is the only place the active user lives; the access policy itself
//! never sees it.

use crate::auth::rbac::{AccessPolicy, RoleTag};
use crate::core::models::user::User;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
struct ActiveSession {
    user: Arc<User>,
    signed_in_at: DateTime<Utc>,
}

/// Holder of the signed-in user snapshot
#[derive(Debug, Default)]
pub struct SessionContext {
    policy: AccessPolicy,
    active: RwLock<Option<ActiveSession>>,
}

impl SessionContext {
    /// Create an empty session context
    pub fn new(policy: AccessPolicy) -> Self {
        Self {
            policy,
            active: RwLock::new(None),
        }
    }

    /// Sign a user in, returning whoever was signed in before
    pub fn sign_in(&self, user: User) -> Option<Arc<User>> {
        info!(user_id = user.id, role = %user.role, "User signed in");
        self.swap(Some(user))
    }

    /// Replace the snapshot wholesale, e.g. after a role switch
    pub fn replace(&self, user: User) -> Option<Arc<User>> {
        info!(user_id = user.id, role = %user.role, "Session user replaced");
        self.swap(Some(user))
    }

    /// Clear the session
    pub fn sign_out(&self) -> Option<Arc<User>> {
        let previous = self.swap(None);
        if let Some(user) = &previous {
            info!(user_id = user.id, "User signed out");
        }
        previous
    }

    fn swap(&self, user: Option<User>) -> Option<Arc<User>> {
        let next = user.map(|user| ActiveSession {
            user: Arc::new(user),
            signed_in_at: Utc::now(),
        });
        std::mem::replace(&mut *self.active.write(), next).map(|session| session.user)
    }

    /// Current user snapshot
    pub fn current(&self) -> Option<Arc<User>> {
        self.active.read().as_ref().map(|session| Arc::clone(&session.user))
    }

    /// When the current snapshot was installed
    pub fn signed_in_at(&self) -> Option<DateTime<Utc>> {
        self.active.read().as_ref().map(|session| session.signed_in_at)
    }

    pub fn is_signed_in(&self) -> bool {
        self.active.read().is_some()
    }

    /// The policy this context delegates to
    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// Whether the current user may use `feature`
    pub fn can_access(&self, feature: &str) -> bool {
        let user = self.current();
        self.policy.can_access(user.as_deref(), feature)
    }

    /// Whether the current user may create an account with `target_role`
    pub fn can_create_role(&self, target_role: &RoleTag) -> bool {
        let user = self.current();
        self.policy.can_create_role(user.as_deref(), target_role)
    }

    /// Whether the current user may reset `target`'s password
    pub fn can_reset_password(&self, target: &User) -> bool {
        let user = self.current();
        self.policy.can_reset_password(user.as_deref(), Some(target))
    }
}
