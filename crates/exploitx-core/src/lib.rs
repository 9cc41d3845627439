//! Core ExploitX library (session reconciliation, store backends, catalog, config).

pub mod auth;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod page;
pub mod session;
pub mod store;
