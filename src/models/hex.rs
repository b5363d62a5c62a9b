//! Validated `#RRGGBB` color strings.
//!
//! [`HexColor`] is the quantization boundary of the color model and the
//! de-duplication key for history and palette lists, so it is always stored
//! in its canonical form: a leading `#` followed by six uppercase hex digits.

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use super::RgbColor;

/// Strict pattern accepted for user-entered and persisted hex colors.
const HEX_PATTERN: &str = r"^#?[0-9a-fA-F]{6}$";

fn hex_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(HEX_PATTERN).expect("hex pattern is a valid regex"))
}

/// Returns true if `input` is a 6-digit hex color with an optional leading `#`.
///
/// Surrounding whitespace is not accepted; callers trim user input first.
pub fn is_valid_hex(input: &str) -> bool {
    hex_regex().is_match(input)
}

/// A canonical `#RRGGBB` color string (uppercase).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parses and normalizes a hex color.
    ///
    /// Accepts `#RRGGBB` or `RRGGBB` in either case, with surrounding
    /// whitespace trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorpick::models::HexColor;
    ///
    /// let hex = HexColor::parse("  ff8800 ").unwrap();
    /// assert_eq!(hex.as_str(), "#FF8800");
    /// assert!(HexColor::parse("#FF88").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if !is_valid_hex(trimmed) {
            anyhow::bail!("Invalid hex color '{trimmed}'. Expected 6 hex digits (#RRGGBB)");
        }
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        Ok(Self(format!("#{}", digits.to_ascii_uppercase())))
    }

    /// Builds the canonical hex string for an RGB color.
    #[must_use]
    pub fn from_rgb(rgb: RgbColor) -> Self {
        Self(rgb.to_hex())
    }

    /// Returns the `#RRGGBB` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts back to RGB channels.
    ///
    /// Infallible: a `HexColor` always holds six valid hex digits.
    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&self.0[range], 16).unwrap_or_default()
        };
        RgbColor::new(channel(1..3), channel(3..5), channel(5..7))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

impl From<RgbColor> for HexColor {
    fn from(value: RgbColor) -> Self {
        Self::from_rgb(value)
    }
}
