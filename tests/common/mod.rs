//! Common test utilities for tracker-access
//!
//! # Usage
//!
//! ```rust
//! use crate::common::fixtures::UserFactory;
//!
//! let lead = UserFactory::team_lead(1, 5);
//! ```

pub mod assertions;
pub mod fixtures;

// Re-export commonly used items
pub use assertions::DecisionAssertions;
pub use fixtures::UserFactory;
