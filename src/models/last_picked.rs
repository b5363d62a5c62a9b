//! The most recent successful pick.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::HexColor;

/// Record of the last picked color, used to restore the displayed color when
/// a surface reopens.
///
/// Serialized as `{ "hex": "#RRGGBB", "at": <epoch milliseconds> }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastPicked {
    /// The picked color.
    pub hex: HexColor,
    /// When it was picked, in milliseconds since the Unix epoch.
    pub at: i64,
}

impl LastPicked {
    /// Creates a record stamped with the current time.
    #[must_use]
    pub fn now(hex: HexColor) -> Self {
        Self {
            hex,
            at: Utc::now().timestamp_millis(),
        }
    }

    /// The pick time as a UTC timestamp, if `at` is in range.
    pub fn picked_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.at).single()
    }
}
