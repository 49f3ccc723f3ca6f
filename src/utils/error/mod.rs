//! Error handling utilities
//!
//! This module defines the error type shared by configuration loading,
//! the CLI and the strict ID decoding helpers.

mod helpers;
#[cfg(test)]
mod tests;
mod types;

pub use types::{PolicyError, Result};
