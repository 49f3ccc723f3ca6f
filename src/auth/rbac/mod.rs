//! Role-Based Access Control (RBAC) policy
//!
//! Stateless decisions over static role and feature tables. Every
//! predicate fails closed: a missing user, an unrecognized role or an
//! unknown feature tag is a denial, never an error.

mod password;
mod permissions;
mod policy;
mod roles;
mod types;

// Re-export public types and structs
pub use permissions::allowed_roles;
pub use policy::AccessPolicy;
pub use roles::creatable_roles_for;
pub use types::{AccessDecision, Feature, Role, RoleColor, RoleTag};
