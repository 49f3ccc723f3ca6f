//! Core domain types for the console
//!
//! User snapshots and the role-gated navigation built on top of them.

pub mod models;
pub mod navigation;
