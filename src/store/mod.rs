//! Persistence of picked colors.
//!
//! The store is a plain key-value collaborator (get/set by key, no
//! transactions). [`Library`] layers the three typed entities on top of it:
//!
//! - `last` → `{ hex, at }` ([`LastPicked`])
//! - `history` → array of `#RRGGBB` strings, bounded
//! - `palette` → array of `#RRGGBB` strings, unbounded
//!
//! Writes always replace a key's full value. Two surfaces writing the same
//! key concurrently resolve as last-writer-wins.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use anyhow::{Context, Result};
use serde_json::Value;
use std::sync::Arc;

use crate::config::Config;
use crate::constants::LAST_PICKED_KEY;
use crate::models::{ColorList, HexColor, LastPicked, ListKind};

/// Durable key-value store holding JSON values.
pub trait KeyValueStore: Send + Sync {
    /// Reads a key. Returns `None` when it was never written.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Replaces the full value of a key.
    fn set(&self, key: &str, value: Value) -> Result<()>;
}

/// Typed access to the persisted history, palette, and last pick.
#[derive(Clone)]
pub struct Library {
    store: Arc<dyn KeyValueStore>,
    history_capacity: usize,
}

impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("history_capacity", &self.history_capacity)
            .finish_non_exhaustive()
    }
}

impl Library {
    /// Wraps a store, bounding history at `history_capacity` entries.
    pub fn new(store: Arc<dyn KeyValueStore>, history_capacity: usize) -> Self {
        Self {
            store,
            history_capacity,
        }
    }

    /// Opens the on-disk library described by `config`.
    pub fn open(config: &Config) -> Result<Self> {
        let data_dir = config.storage.resolve_data_dir()?;
        let store = JsonFileStore::in_dir(&data_dir);
        tracing::debug!("Using color store at {}", store.path().display());
        Ok(Self::new(Arc::new(store), config.history.capacity))
    }

    /// Maximum length for lists of `kind`.
    pub const fn capacity_for(&self, kind: ListKind) -> Option<usize> {
        match kind {
            ListKind::History => Some(self.history_capacity),
            ListKind::Palette => None,
        }
    }

    /// Reads a list, tolerating malformed stored data.
    ///
    /// Entries that are not valid hex colors are dropped, the rest are
    /// case-normalized, de-duplicated, and bounded.
    pub fn load_list(&self, kind: ListKind) -> Result<ColorList> {
        let capacity = self.capacity_for(kind);
        let value = self
            .store
            .get(kind.key())
            .with_context(|| format!("Failed to read {}", kind.key()))?;

        let Some(value) = value else {
            return Ok(ColorList::from_entries([], capacity));
        };

        let Value::Array(items) = value else {
            tracing::warn!(key = kind.key(), "Stored list is not an array, ignoring it");
            return Ok(ColorList::from_entries([], capacity));
        };

        let entries = items.iter().filter_map(|item| {
            let parsed = item.as_str().map(HexColor::parse);
            match parsed {
                Some(Ok(hex)) => Some(hex),
                _ => {
                    tracing::warn!(key = kind.key(), entry = %item, "Dropping invalid stored color");
                    None
                }
            }
        });
        Ok(ColorList::from_entries(entries, capacity))
    }

    /// Writes a full list.
    pub fn save_list(&self, kind: ListKind, list: &ColorList) -> Result<()> {
        let value = serde_json::to_value(list).context("Failed to serialize color list")?;
        self.store
            .set(kind.key(), value)
            .with_context(|| format!("Failed to save {}", kind.key()))
    }

    /// Loads a list bound to this library for persisted edits.
    pub fn list_store(&self, kind: ListKind) -> Result<ListStore> {
        Ok(ListStore {
            kind,
            list: self.load_list(kind)?,
            library: self.clone(),
        })
    }

    /// The persisted history.
    pub fn history(&self) -> Result<ListStore> {
        self.list_store(ListKind::History)
    }

    /// The persisted palette.
    pub fn palette(&self) -> Result<ListStore> {
        self.list_store(ListKind::Palette)
    }

    /// Reads the last pick, if any. A malformed record reads as absent.
    pub fn load_last(&self) -> Result<Option<LastPicked>> {
        let value = self
            .store
            .get(LAST_PICKED_KEY)
            .context("Failed to read last picked color")?;

        Ok(value.and_then(|value| match serde_json::from_value(value) {
            Ok(last) => Some(last),
            Err(e) => {
                tracing::warn!("Ignoring malformed last picked color: {e}");
                None
            }
        }))
    }

    /// Overwrites the last pick.
    pub fn save_last(&self, last: &LastPicked) -> Result<()> {
        let value = serde_json::to_value(last).context("Failed to serialize last picked color")?;
        self.store
            .set(LAST_PICKED_KEY, value)
            .context("Failed to save last picked color")
    }
}

/// A [`ColorList`] bound to its storage key.
///
/// `record` and `remove` re-read the stored list, apply the change, and
/// persist the full list in one call, so edits made by another surface since
/// this one opened are kept. If the write fails the error is returned and the
/// in-memory list keeps the change until the next reload.
#[derive(Debug, Clone)]
pub struct ListStore {
    kind: ListKind,
    list: ColorList,
    library: Library,
}

impl ListStore {
    /// Which list this is.
    pub const fn kind(&self) -> ListKind {
        self.kind
    }

    /// Current in-memory entries.
    pub const fn list(&self) -> &ColorList {
        &self.list
    }

    /// Moves `hex` to the front of the stored list and persists.
    pub fn record(&mut self, hex: HexColor) -> Result<()> {
        self.reload()?;
        self.list.record(hex);
        self.persist()
    }

    /// Removes every occurrence of `hex` from the stored list and persists.
    /// Returns whether anything was removed.
    pub fn remove(&mut self, hex: &HexColor) -> Result<bool> {
        self.reload()?;
        let removed = self.list.remove(hex);
        self.persist()?;
        Ok(removed)
    }

    /// Empties the list and persists.
    pub fn clear(&mut self) -> Result<()> {
        self.list.clear();
        self.persist()
    }

    /// Re-reads the list from the store, discarding in-memory state.
    pub fn reload(&mut self) -> Result<()> {
        self.list = self.library.load_list(self.kind)?;
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        self.library.save_list(self.kind, &self.list)?;
        tracing::debug!(
            list = self.kind.key(),
            len = self.list.len(),
            "Persisted color list"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hex(s: &str) -> HexColor {
        HexColor::parse(s).unwrap()
    }

    fn memory_library() -> (Arc<MemoryStore>, Library) {
        let store = Arc::new(MemoryStore::new());
        let library = Library::new(store.clone(), 15);
        (store, library)
    }

    #[test]
    fn test_never_written_reads_default() {
        let (_, library) = memory_library();
        assert!(library.load_list(ListKind::History).unwrap().is_empty());
        assert!(library.load_list(ListKind::Palette).unwrap().is_empty());
        assert_eq!(library.load_last().unwrap(), None);
    }

    #[test]
    fn test_history_is_bounded_palette_is_not() {
        let (_, library) = memory_library();
        assert_eq!(library.capacity_for(ListKind::History), Some(15));
        assert_eq!(library.capacity_for(ListKind::Palette), None);
    }

    #[test]
    fn test_record_persists_full_list() {
        let (store, library) = memory_library();
        let mut history = library.history().unwrap();
        history.record(hex("#AAAAAA")).unwrap();
        history.record(hex("#BBBBBB")).unwrap();
        history.record(hex("#aaaaaa")).unwrap();

        assert_eq!(
            store.get("history").unwrap(),
            Some(json!(["#AAAAAA", "#BBBBBB"]))
        );
    }

    #[test]
    fn test_remove_and_clear_persist() {
        let (store, library) = memory_library();
        let mut palette = library.palette().unwrap();
        palette.record(hex("#111111")).unwrap();
        palette.record(hex("#222222")).unwrap();

        assert!(!palette.remove(&hex("#333333")).unwrap());
        assert!(palette.remove(&hex("#111111")).unwrap());
        assert_eq!(store.get("palette").unwrap(), Some(json!(["#222222"])));

        palette.clear().unwrap();
        assert_eq!(store.get("palette").unwrap(), Some(json!([])));
    }

    #[test]
    fn test_failed_persist_keeps_memory_change() {
        let (store, library) = memory_library();
        let mut palette = library.palette().unwrap();
        palette.record(hex("#111111")).unwrap();

        store.set_fail_writes(true);
        assert!(palette.record(hex("#222222")).is_err());
        assert_eq!(palette.list().len(), 2);
        assert_eq!(store.get("palette").unwrap(), Some(json!(["#111111"])));

        // The next edit starts from what was actually stored
        store.set_fail_writes(false);
        palette.record(hex("#333333")).unwrap();
        assert_eq!(
            store.get("palette").unwrap(),
            Some(json!(["#333333", "#111111"]))
        );
    }

    #[test]
    fn test_edits_keep_entries_written_by_other_handles() {
        let (store, library) = memory_library();
        let mut first = library.palette().unwrap();
        let mut second = library.palette().unwrap();

        first.record(hex("#111111")).unwrap();
        second.record(hex("#222222")).unwrap();
        assert_eq!(
            store.get("palette").unwrap(),
            Some(json!(["#222222", "#111111"]))
        );

        first.record(hex("#333333")).unwrap();
        assert!(second.remove(&hex("#111111")).unwrap());
        assert_eq!(
            store.get("palette").unwrap(),
            Some(json!(["#333333", "#222222"]))
        );
        assert_eq!(second.list().len(), 2);
    }

    #[test]
    fn test_load_list_normalizes_stored_data() {
        let (store, library) = memory_library();
        store
            .set(
                "palette",
                json!(["#abcdef", "oops", 42, "ABCDEF", "#000000"]),
            )
            .unwrap();

        let palette = library.load_list(ListKind::Palette).unwrap();
        let entries: Vec<&str> = palette.iter().map(HexColor::as_str).collect();
        assert_eq!(entries, ["#ABCDEF", "#000000"]);
    }

    #[test]
    fn test_load_list_applies_capacity() {
        let store = Arc::new(MemoryStore::new());
        let library = Library::new(store.clone(), 2);
        store
            .set("history", json!(["#111111", "#222222", "#333333"]))
            .unwrap();
        assert_eq!(library.load_list(ListKind::History).unwrap().len(), 2);
    }

    #[test]
    fn test_load_list_non_array_reads_empty() {
        let (store, library) = memory_library();
        store.set("history", json!({"not": "a list"})).unwrap();
        assert!(library.load_list(ListKind::History).unwrap().is_empty());
    }

    #[test]
    fn test_last_roundtrip_and_malformed() {
        let (store, library) = memory_library();
        let last = LastPicked {
            hex: hex("#FF00FF"),
            at: 42,
        };
        library.save_last(&last).unwrap();
        assert_eq!(library.load_last().unwrap(), Some(last));

        store.set("last", json!({"hex": 7})).unwrap();
        assert_eq!(library.load_last().unwrap(), None);
    }

    #[test]
    fn test_reload_discards_memory_state() {
        let (store, library) = memory_library();
        let mut history = library.history().unwrap();
        history.record(hex("#121212")).unwrap();

        store.set("history", json!(["#343434"])).unwrap();
        history.reload().unwrap();
        assert_eq!(history.list().first(), Some(&hex("#343434")));
    }
}
