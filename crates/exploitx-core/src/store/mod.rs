//! Key-value store backends.
//!
//! The page only ever reads two paths per identity (`users/<key>` and
//! `scores/<key>`). A backend returns `Ok(None)` when nothing is stored at a
//! path and `Err` when the read itself failed.

pub mod memory;
pub mod rtdb;

use std::future::Future;

use anyhow::{Context, Result};
pub use memory::MemoryStore;
pub use rtdb::RtdbStore;
use serde_json::Value;

use crate::config::StoreConfig;

/// Read-only access to a hierarchical key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value at a `/`-separated path.
    fn get(&self, path: &str) -> impl Future<Output = Result<Option<Value>>> + Send;
}

/// Store selected from configuration.
#[derive(Debug, Clone)]
pub enum Store {
    Rtdb(RtdbStore),
    Memory(MemoryStore),
}

impl Store {
    /// Builds the configured backend.
    ///
    /// A database URL selects the REST backend. Otherwise the seed file (if
    /// any) is loaded into memory, and with neither the store is empty.
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        if let Some(url) = config.url.as_deref() {
            let store = RtdbStore::new(url, config.auth.clone(), config.timeout())
                .context("Failed to configure database client")?;
            return Ok(Self::Rtdb(store));
        }
        match config.seed_file.as_deref() {
            Some(path) => Ok(Self::Memory(MemoryStore::from_file(path)?)),
            None => {
                tracing::info!("no database configured; using an empty in-memory store");
                Ok(Self::Memory(MemoryStore::empty()))
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Rtdb(store) => store.base_url().to_string(),
            Self::Memory(_) => "in-memory".to_string(),
        }
    }
}

impl KeyValueStore for Store {
    async fn get(&self, path: &str) -> Result<Option<Value>> {
        match self {
            Self::Rtdb(store) => store.get(path).await,
            Self::Memory(store) => store.get(path).await,
        }
    }
}
