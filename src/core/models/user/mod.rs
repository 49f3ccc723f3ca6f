//! User models
//!
//! The console never owns user records; it receives snapshots from the
//! tracker backend and hands them to the access policy.

mod types;

pub use types::{OrganizationId, TeamId, User, UserId};
