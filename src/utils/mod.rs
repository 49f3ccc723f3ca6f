//! Utility modules
//!
//! - **data**: ID obfuscation for URLs
//! - **error**: Error type and result alias
//! - **logging**: tracing subscriber setup

pub mod data;
pub mod error;
pub mod logging;
