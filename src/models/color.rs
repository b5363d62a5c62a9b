//! The [`Color`] value: one canonical HSL triple with its derived views.

use serde::Serialize;

use super::{HexColor, HslColor, RgbColor};

/// A fully derived color.
///
/// Stored canonically as a normalized HSL triple, because the hue slider and
/// the saturation/lightness surface operate on that form. The RGB channels
/// and the hex string are computed once on construction and always agree
/// with the HSL triple.
///
/// Serializes all three forms. Only the constructors build a `Color`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Color {
    hsl: HslColor,
    rgb: RgbColor,
    hex: HexColor,
}

impl Color {
    /// Builds a color from an HSL triple, normalizing it first.
    #[must_use]
    pub fn from_hsl(hsl: HslColor) -> Self {
        let hsl = hsl.normalized();
        let rgb = hsl.to_rgb();
        Self {
            hsl,
            rgb,
            hex: HexColor::from_rgb(rgb),
        }
    }

    /// Builds a color from RGB channels.
    ///
    /// The HSL form is derived from the channels, so the resulting RGB and
    /// hex views reproduce the input exactly.
    #[must_use]
    pub fn from_rgb(rgb: RgbColor) -> Self {
        Self::from_hsl(rgb.to_hsl())
    }

    /// Builds a color from a validated hex string.
    #[must_use]
    pub fn from_hex(hex: &HexColor) -> Self {
        Self::from_rgb(hex.to_rgb())
    }

    /// Canonical HSL triple.
    pub const fn hsl(&self) -> HslColor {
        self.hsl
    }

    /// Derived RGB channels.
    pub const fn rgb(&self) -> RgbColor {
        self.rgb
    }

    /// Derived `#RRGGBB` string.
    pub const fn hex(&self) -> &HexColor {
        &self.hex
    }
}

impl Default for Color {
    /// The editor's starting color, `hsl(210, 70%, 50%)`.
    fn default() -> Self {
        Self::from_hsl(HslColor::new(210.0, 70.0, 50.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hsl_derives_views() {
        let color = Color::from_hsl(HslColor::new(0.0, 100.0, 50.0));
        assert_eq!(color.rgb(), RgbColor::new(255, 0, 0));
        assert_eq!(color.hex().as_str(), "#FF0000");
    }

    #[test]
    fn test_from_hsl_normalizes() {
        let color = Color::from_hsl(HslColor::new(400.0, -10.0, 150.0));
        assert_eq!(color.hsl(), HslColor::new(40.0, 0.0, 100.0));
        assert_eq!(color.hex().as_str(), "#FFFFFF");
    }

    #[test]
    fn test_from_hex_is_exact() {
        let hex = HexColor::parse("#3A7BD5").unwrap();
        let color = Color::from_hex(&hex);
        assert_eq!(color.hex(), &hex);
        assert_eq!(color.rgb(), RgbColor::new(0x3A, 0x7B, 0xD5));
    }

    #[test]
    fn test_from_rgb_is_exact() {
        let rgb = RgbColor::new(1, 2, 3);
        assert_eq!(Color::from_rgb(rgb).rgb(), rgb);
    }

    #[test]
    fn test_default_color() {
        let color = Color::default();
        assert_eq!(color.hsl(), HslColor::new(210.0, 70.0, 50.0));
        assert_eq!(color.rgb().r, 38);
        assert_eq!(color.rgb().b, 217);
    }

    #[test]
    fn test_serialized_forms_agree() {
        let value = serde_json::to_value(Color::from_hsl(HslColor::new(400.0, 100.0, 50.0))).unwrap();
        assert_eq!(value["hsl"]["h"], 40.0);
        assert_eq!(value["rgb"], serde_json::json!({"r": 255, "g": 170, "b": 0}));
        assert_eq!(value["hex"], "#FFAA00");
    }
}
