//! Data models shared across the console

pub mod user;
