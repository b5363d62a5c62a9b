//! Bounded, de-duplicating, most-recent-first color lists.
//!
//! The same structure backs both the pick history (capped) and the saved
//! palette (uncapped). Entries are [`HexColor`]s, which are case-normalized
//! on construction, so equality is the de-duplication rule.

use serde::Serialize;

use super::HexColor;

/// Default maximum number of history entries.
pub const DEFAULT_HISTORY_CAPACITY: usize = 15;

/// Which persisted list a [`ColorList`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// Recently picked colors, maintained automatically.
    History,
    /// User-curated saved colors.
    Palette,
}

impl ListKind {
    /// Storage key for this list.
    pub const fn key(self) -> &'static str {
        match self {
            Self::History => "history",
            Self::Palette => "palette",
        }
    }
}

/// Ordered color list, most recent first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ColorList {
    entries: Vec<HexColor>,
    #[serde(skip)]
    capacity: Option<usize>,
}

impl ColorList {
    /// Creates an empty list with no length limit.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            entries: Vec::new(),
            capacity: None,
        }
    }

    /// Creates an empty list holding at most `capacity` entries.
    #[must_use]
    pub const fn bounded(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: Some(capacity),
        }
    }

    /// Builds a list from stored entries (most recent first), dropping later
    /// duplicates and enforcing the capacity.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = HexColor>, capacity: Option<usize>) -> Self {
        let mut list = Self {
            entries: Vec::new(),
            capacity,
        };
        for hex in entries {
            if !list.entries.contains(&hex) {
                list.entries.push(hex);
            }
        }
        list.truncate();
        list
    }

    /// Moves `hex` to the front, removing any earlier occurrence and trimming
    /// to capacity.
    ///
    /// ```
    /// use colorpick::models::{ColorList, HexColor};
    ///
    /// let mut history = ColorList::bounded(15);
    /// for hex in ["#AAAAAA", "#BBBBBB", "#aaaaaa"] {
    ///     history.record(HexColor::parse(hex).unwrap());
    /// }
    /// let entries: Vec<&str> = history.iter().map(HexColor::as_str).collect();
    /// assert_eq!(entries, ["#AAAAAA", "#BBBBBB"]);
    /// ```
    pub fn record(&mut self, hex: HexColor) {
        self.entries.retain(|existing| existing != &hex);
        self.entries.insert(0, hex);
        self.truncate();
    }

    /// Removes every entry equal to `hex`. Returns true if anything was removed.
    pub fn remove(&mut self, hex: &HexColor) -> bool {
        let before = self.entries.len();
        self.entries.retain(|existing| existing != hex);
        self.entries.len() != before
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether `hex` is in the list.
    pub fn contains(&self, hex: &HexColor) -> bool {
        self.entries.contains(hex)
    }

    /// Iterates entries, most recent first.
    pub fn iter(&self) -> std::slice::Iter<'_, HexColor> {
        self.entries.iter()
    }

    /// The most recent entry.
    pub fn first(&self) -> Option<&HexColor> {
        self.entries.first()
    }

    /// Entries as a slice, most recent first.
    pub fn as_slice(&self) -> &[HexColor] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum length, if bounded.
    pub const fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    fn truncate(&mut self) {
        if let Some(capacity) = self.capacity {
            self.entries.truncate(capacity);
        }
    }
}

impl<'a> IntoIterator for &'a ColorList {
    type Item = &'a HexColor;
    type IntoIter = std::slice::Iter<'a, HexColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
