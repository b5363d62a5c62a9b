//! JSON file backed key-value store.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::KeyValueStore;
use crate::constants::STORE_FILE_NAME;

/// Durable store keeping every key in one JSON object on disk.
///
/// Each `set` rewrites the whole file with a temp file + rename so a crash
/// never leaves a half-written store. A missing file reads as empty.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Opens (without creating) the store at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Opens the store file inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(STORE_FILE_NAME))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read store file: {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse store file: {}", self.path.display()))?
        {
            Value::Object(map) => Ok(map),
            _ => anyhow::bail!(
                "Store file {} does not contain a JSON object",
                self.path.display()
            ),
        }
    }

    fn write_all(&self, map: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create store directory: {}", parent.display())
            })?;
        }

        let content =
            serde_json::to_string_pretty(map).context("Failed to serialize store contents")?;
        let temp_path = self.path.with_extension("json.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp store file: {}", temp_path.display())
        })?;
        fs::rename(&temp_path, &self.path).with_context(|| {
            format!("Failed to rename temp store file to: {}", self.path.display())
        })?;

        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| anyhow::anyhow!("Store lock poisoned"))?;
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| anyhow::anyhow!("Store lock poisoned"))?;
        let mut map = self.read_all()?;
        map.insert(key.to_string(), value);
        self.write_all(&map)?;
        tracing::debug!(key, path = %self.path.display(), "Persisted store key");
        Ok(())
    }
}
