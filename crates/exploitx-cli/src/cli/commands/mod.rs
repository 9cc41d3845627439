//! CLI command handlers.

pub mod auth;
pub mod challenges;
pub mod config;
pub mod key;
pub mod page;
pub mod profile;
