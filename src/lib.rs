//! # tracker-access
//!
//! Authorization layer of the issue tracker administration console.
//!
//! The console gates every button, menu item and route on a small, static
//! role model: four roles ordered by privilege, a feature table saying which
//! roles may use which capability, and a hand-written table of which roles
//! may create which other roles. Every decision fails closed.
//!
//! ## Quick Start
//!
//! ```rust
//! use tracker_access::{AccessPolicy, Role, User};
//!
//! let policy = AccessPolicy::default();
//! let lead = User::new(7, "lead", Role::TeamLead).with_team(5);
//!
//! assert!(policy.can_access(Some(&lead), "assign_tickets"));
//! assert!(!policy.can_access(Some(&lead), "view_all_tickets"));
//! assert!(policy.can_create_role(Some(&lead), &Role::User.into()));
//! ```
//!
//! ## Session Context
//!
//! ```rust
//! use tracker_access::{SessionContext, Role, User};
//!
//! let session = SessionContext::default();
//! assert!(!session.can_access("create_projects"));
//!
//! session.sign_in(User::new(1, "admin", Role::OrgAdmin).with_organization(3));
//! assert!(session.can_access("create_projects"));
//! ```

#![warn(clippy::all)]

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use auth::{AccessDecision, AccessPolicy, Feature, Role, RoleColor, RoleTag, SessionContext};
pub use config::Config;
pub use core::models::user::User;
pub use core::navigation::{NavItem, Navigation};
pub use utils::data::IdCodec;
pub use utils::error::{PolicyError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information stamped by `build.rs`
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

/// Build information for this binary
pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: VERSION,
        build_time: env!("BUILD_TIME"),
        git_hash: env!("GIT_HASH"),
        rust_version: env!("RUST_VERSION"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info() {
        let info = build_info();
        assert!(!info.version.is_empty());
        assert_eq!(info.version, VERSION);
        assert!(!info.git_hash.is_empty());
    }

    #[test]
    fn test_constants() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(NAME, "tracker-access");
        assert_eq!(DESCRIPTION, env!("CARGO_PKG_DESCRIPTION"));
    }
}
