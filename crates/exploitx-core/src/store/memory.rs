//! In-memory store over a JSON tree.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::Value;

use super::KeyValueStore;

/// JSON document addressed by `/`-separated paths, like a realtime database
/// export: `{"users": {"<key>": ...}, "scores": {"<key>": 42}}`.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    root: Arc<Value>,
    delay: Option<Duration>,
}

impl MemoryStore {
    pub fn empty() -> Self {
        Self::from_json(Value::Object(serde_json::Map::new()))
    }

    pub fn from_json(root: Value) -> Self {
        Self {
            root: Arc::new(root),
            delay: None,
        }
    }

    /// Loads a JSON export from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed data from {}", path.display()))?;
        let root: Value = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse seed data from {}", path.display()))?;
        Ok(Self::from_json(root))
    }

    /// Delays every read, to simulate network latency.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    fn lookup(&self, path: &str) -> Option<&Value> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self.root.as_ref(), |node, segment| node.get(segment))
            .filter(|value| !value.is_null())
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, path: &str) -> Result<Option<Value>> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.lookup(path).cloned())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn store() -> MemoryStore {
        MemoryStore::from_json(json!({
            "users": {
                "a_dot_b_at_c_com": {"name": "Bob"},
                "legacy_at_c_com": "Alice",
                "gone_at_c_com": null
            },
            "scores": {"a_dot_b_at_c_com": 42}
        }))
    }

    #[tokio::test]
    async fn test_get_nested_paths() {
        let store = store();
        assert_eq!(
            store.get("users/a_dot_b_at_c_com").await.unwrap(),
            Some(json!({"name": "Bob"}))
        );
        assert_eq!(
            store.get("users/legacy_at_c_com").await.unwrap(),
            Some(json!("Alice"))
        );
        assert_eq!(
            store.get("/scores/a_dot_b_at_c_com/").await.unwrap(),
            Some(json!(42))
        );
    }

    #[tokio::test]
    async fn test_missing_and_null_are_absent() {
        let store = store();
        assert_eq!(store.get("users/nobody").await.unwrap(), None);
        assert_eq!(store.get("users/gone_at_c_com").await.unwrap(), None);
        assert_eq!(store.get("scores/a_dot_b_at_c_com/deeper").await.unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_applies() {
        let store = store().with_delay(Duration::from_secs(5));
        let started = tokio::time::Instant::now();
        store.get("users/legacy_at_c_com").await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(5));
    }
}
