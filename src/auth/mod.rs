//! Authorization
//!
//! Role-based access decisions and the session context that feeds them.

pub mod rbac;
pub mod session;

// Re-export commonly used types
pub use rbac::{AccessDecision, AccessPolicy, Feature, Role, RoleColor, RoleTag};
pub use session::SessionContext;
