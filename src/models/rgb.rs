//! RGB color handling with hex parsing and HSL conversion.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::HslColor;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings (#RRGGBB) and conversion to and from HSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates an `RgbColor` from unbounded integers, saturating each channel
    /// into 0-255.
    ///
    /// ```
    /// use colorpick::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::clamped(-20, 128, 300), RgbColor::new(0, 128, 255));
    /// ```
    #[must_use]
    pub fn clamped(r: i64, g: i64, b: i64) -> Self {
        let clamp = |v: i64| v.clamp(0, 255) as u8;
        Self::new(clamp(r), clamp(g), clamp(b))
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use colorpick::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("00FF00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.is_ascii() {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use colorpick::models::RgbColor;
    ///
    /// let color = RgbColor::new(255, 0, 0);
    /// assert_eq!(color.to_hex(), "#FF0000");
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Formats the color as CSS functional notation, e.g. `rgb(38, 128, 217)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Converts the RGB color to HSL (Hue, Saturation, Lightness).
    ///
    /// Hue is in degrees `[0, 360)`, saturation and lightness in percent
    /// `[0, 100]`. Achromatic colors (all channels equal) report hue and
    /// saturation of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorpick::models::RgbColor;
    ///
    /// let hsl = RgbColor::new(0, 0, 255).to_hsl();
    /// assert!((hsl.h - 240.0).abs() < 0.01);
    /// assert!((hsl.s - 100.0).abs() < 0.01);
    /// assert!((hsl.l - 50.0).abs() < 0.01);
    /// ```
    #[must_use]
    pub fn to_hsl(&self) -> HslColor {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return HslColor::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        HslColor::new(h * 60.0, s * 100.0, l * 100.0)
    }

    /// Creates an `RgbColor` from an HSL color.
    ///
    /// The input is normalized first (hue wrapped into `[0, 360)`, saturation
    /// and lightness clamped to `[0, 100]`), so any triple yields a valid color.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorpick::models::{HslColor, RgbColor};
    ///
    /// assert_eq!(RgbColor::from_hsl(HslColor::new(120.0, 100.0, 50.0)), RgbColor::new(0, 255, 0));
    /// assert_eq!(RgbColor::from_hsl(HslColor::new(0.0, 0.0, 100.0)), RgbColor::new(255, 255, 255));
    /// ```
    #[must_use]
    pub fn from_hsl(hsl: HslColor) -> Self {
        let HslColor { h, s, l } = hsl.normalized();
        let h = h / 360.0;
        let s = s / 100.0;
        let l = l / 100.0;

        if s == 0.0 {
            let v = to_channel(l);
            return Self::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Self::new(
            to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
            to_channel(hue_to_channel(p, q, h)),
            to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
        )
    }
}

/// Evaluates one RGB channel of the HSL inverse at hue offset `t` (in turns).
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Scales a `[0, 1]` intensity to the nearest 0-255 channel value.
fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hue_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).abs() % 360.0;
        d.min(360.0 - d)
    }

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#FF0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));

        let color = RgbColor::from_hex("00FF00").unwrap();
        assert_eq!(color, RgbColor::new(0, 255, 0));

        let color = RgbColor::from_hex("#0000ff").unwrap();
        assert_eq!(color, RgbColor::new(0, 0, 255));

        let color = RgbColor::from_hex("  #FFFFFF  ").unwrap();
        assert_eq!(color, RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#FFFFFFF").is_err());
        assert!(RgbColor::from_hex("GGGGGG").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#").is_err());
        assert!(RgbColor::from_hex("#ÄÄÄÄ").is_err());
    }

    #[test]
    fn test_to_hex() {
        let color = RgbColor::new(255, 0, 0);
        assert_eq!(color.to_hex(), "#FF0000");

        let color = RgbColor::new(0, 128, 255);
        assert_eq!(color.to_hex(), "#0080FF");

        let color = RgbColor::new(0, 0, 0);
        assert_eq!(color.to_hex(), "#000000");

        let color = RgbColor::new(10, 11, 12);
        assert_eq!(color.to_hex(), "#0A0B0C");
    }

    #[test]
    fn test_to_css() {
        assert_eq!(RgbColor::new(38, 128, 217).to_css(), "rgb(38, 128, 217)");
    }

    #[test]
    fn test_clamped() {
        assert_eq!(RgbColor::clamped(0, 255, 128), RgbColor::new(0, 255, 128));
        assert_eq!(RgbColor::clamped(-1, 256, i64::MAX), RgbColor::new(0, 255, 255));
    }

    #[test]
    fn test_hex_roundtrip_all_channels() {
        // Every channel value survives the hex boundary exactly.
        for v in 0..=255u8 {
            let color = RgbColor::new(v, 255 - v, v / 2);
            let parsed = RgbColor::from_hex(&color.to_hex()).unwrap();
            assert_eq!(color, parsed);
        }
    }

    #[test]
    fn test_default() {
        let color = RgbColor::default();
        assert_eq!(color, RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_rgb_to_hsl_primary_colors() {
        let red = RgbColor::new(255, 0, 0).to_hsl();
        assert!((red.h - 0.0).abs() < 0.01);
        assert!((red.s - 100.0).abs() < 0.01);
        assert!((red.l - 50.0).abs() < 0.01);

        let green = RgbColor::new(0, 255, 0).to_hsl();
        assert!((green.h - 120.0).abs() < 0.01);

        let blue = RgbColor::new(0, 0, 255).to_hsl();
        assert!((blue.h - 240.0).abs() < 0.01);
    }

    #[test]
    fn test_rgb_to_hsl_magenta_side_of_red() {
        // Max is red with green < blue: hue lands just below 360.
        let hsl = RgbColor::new(255, 0, 128).to_hsl();
        assert!(hsl.h > 300.0 && hsl.h < 360.0);
    }

    #[test]
    fn test_rgb_to_hsl_grayscale() {
        let black = RgbColor::new(0, 0, 0).to_hsl();
        assert_eq!((black.h, black.s, black.l), (0.0, 0.0, 0.0));

        let white = RgbColor::new(255, 255, 255).to_hsl();
        assert_eq!((white.h, white.s), (0.0, 0.0));
        assert!((white.l - 100.0).abs() < 0.01);

        let gray = RgbColor::new(128, 128, 128).to_hsl();
        assert_eq!((gray.h, gray.s), (0.0, 0.0));
        assert!((gray.l - 50.196).abs() < 0.01);
    }

    #[test]
    fn test_hsl_to_rgb_primary_colors() {
        assert_eq!(
            RgbColor::from_hsl(HslColor::new(0.0, 100.0, 50.0)),
            RgbColor::new(255, 0, 0)
        );
        assert_eq!(
            RgbColor::from_hsl(HslColor::new(120.0, 100.0, 50.0)),
            RgbColor::new(0, 255, 0)
        );
        assert_eq!(
            RgbColor::from_hsl(HslColor::new(240.0, 100.0, 50.0)),
            RgbColor::new(0, 0, 255)
        );
    }

    #[test]
    fn test_hsl_to_rgb_achromatic_ignores_hue() {
        let a = RgbColor::from_hsl(HslColor::new(0.0, 0.0, 50.0));
        let b = RgbColor::from_hsl(HslColor::new(275.0, 0.0, 50.0));
        assert_eq!(a, b);
        assert_eq!(a, RgbColor::new(128, 128, 128));
    }

    #[test]
    fn test_hsl_to_rgb_normalizes_out_of_range() {
        // Hue 480 wraps to 120; saturation and lightness clamp.
        assert_eq!(
            RgbColor::from_hsl(HslColor::new(480.0, 150.0, 50.0)),
            RgbColor::new(0, 255, 0)
        );
        assert_eq!(
            RgbColor::from_hsl(HslColor::new(10.0, 50.0, -5.0)),
            RgbColor::new(0, 0, 0)
        );
    }

    #[test]
    fn test_rgb_hsl_rgb_is_exact() {
        // Quantization only happens at the RGB boundary, so RGB survives an
        // HSL round trip exactly.
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(17) {
                for b in (0..=255u8).step_by(51) {
                    let color = RgbColor::new(r, g, b);
                    let back = RgbColor::from_hsl(color.to_hsl());
                    assert_eq!(color, back, "round trip failed for {color}");
                }
            }
        }
    }

    #[test]
    fn test_hsl_rgb_hsl_within_one_unit() {
        for h in (0..360).step_by(15) {
            for s in [80.0, 90.0, 100.0] {
                for l in [35.0, 50.0, 65.0] {
                    let h = f64::from(h);
                    let back = RgbColor::from_hsl(HslColor::new(h, s, l)).to_hsl();
                    assert!(
                        hue_distance(back.h, h) <= 1.0,
                        "hue drifted: {h} -> {}",
                        back.h
                    );
                    assert!((back.s - s).abs() <= 1.0, "saturation drifted: {s} -> {}", back.s);
                    assert!((back.l - l).abs() <= 1.0, "lightness drifted: {l} -> {}", back.l);
                }
            }
        }
    }

    #[test]
    fn test_hsl_rgb_hsl_achromatic_hue_is_zero() {
        for l in [0.0, 25.0, 50.0, 75.0, 100.0] {
            let back = RgbColor::from_hsl(HslColor::new(200.0, 0.0, l)).to_hsl();
            assert_eq!(back.h, 0.0);
            assert_eq!(back.s, 0.0);
            assert!((back.l - l).abs() <= 1.0);
        }
    }
}
