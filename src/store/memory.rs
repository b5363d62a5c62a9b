//! In-memory key-value store.

use anyhow::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use super::KeyValueStore;

/// Non-durable store for tests and ephemeral sessions.
///
/// Writes can be made to fail with [`MemoryStore::set_fail_writes`] to
/// exercise persistence error paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, Value>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// When true, every subsequent `set` fails without changing anything.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let values = self
            .values
            .lock()
            .map_err(|_| anyhow::anyhow!("Store lock poisoned"))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            anyhow::bail!("Store write rejected for key '{key}'");
        }
        let mut values = self
            .values
            .lock()
            .map_err(|_| anyhow::anyhow!("Store lock poisoned"))?;
        values.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_missing() {
        let store = MemoryStore::new();
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn test_set_and_get() {
        let store = MemoryStore::new();
        store.set("history", json!(["#FFFFFF"])).unwrap();
        assert_eq!(store.get("history").unwrap(), Some(json!(["#FFFFFF"])));
    }

    #[test]
    fn test_fail_writes() {
        let store = MemoryStore::new();
        store.set("palette", json!(["#000000"])).unwrap();

        store.set_fail_writes(true);
        assert!(store.set("palette", json!([])).is_err());
        assert_eq!(store.get("palette").unwrap(), Some(json!(["#000000"])));

        store.set_fail_writes(false);
        store.set("palette", json!([])).unwrap();
        assert_eq!(store.get("palette").unwrap(), Some(json!([])));
    }
}
