//! Integration tests for tracker-access
//!
//! These tests verify the interaction between multiple components
//! and test real system behavior without mocking.

pub mod config_tests;
pub mod policy_tests;
pub mod session_tests;
