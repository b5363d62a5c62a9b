//! HSL (hue, saturation, lightness) color triple.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RgbColor;

/// Upper bound of the hue circle in degrees (exclusive after normalization).
pub const HUE_MAX: f64 = 360.0;

/// Upper bound of saturation and lightness in percent.
pub const PERCENT_MAX: f64 = 100.0;

/// A color in HSL notation.
///
/// Hue is measured in degrees, saturation and lightness in percent. The raw
/// struct accepts any value; [`HslColor::normalized`] produces the legal form
/// used as canonical storage.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HslColor {
    /// Hue in degrees
    pub h: f64,
    /// Saturation in percent
    pub s: f64,
    /// Lightness in percent
    pub l: f64,
}

impl HslColor {
    /// Creates an HSL triple without normalizing it.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Returns the legal form of this triple.
    ///
    /// Hue is circular and wraps modulo 360 (so 400 becomes 40 and -30 becomes
    /// 330). Saturation and lightness saturate at `[0, 100]`. Non-finite
    /// components collapse to 0.
    ///
    /// ```
    /// use colorpick::models::HslColor;
    ///
    /// let hsl = HslColor::new(400.0, -10.0, 150.0).normalized();
    /// assert_eq!(hsl, HslColor::new(40.0, 0.0, 100.0));
    /// ```
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            h: wrap_hue(self.h),
            s: clamp_percent(self.s),
            l: clamp_percent(self.l),
        }
    }

    /// Converts to the nearest RGB color.
    #[must_use]
    pub fn to_rgb(self) -> RgbColor {
        RgbColor::from_hsl(self)
    }

    /// Returns a copy with the hue replaced.
    #[must_use]
    pub const fn with_hue(self, h: f64) -> Self {
        Self { h, ..self }
    }

    /// Returns a copy with the saturation replaced.
    #[must_use]
    pub const fn with_saturation(self, s: f64) -> Self {
        Self { s, ..self }
    }

    /// Returns a copy with the lightness replaced.
    #[must_use]
    pub const fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    /// Formats the color as rounded CSS notation, e.g. `hsl(210, 70%, 50%)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            rounded(self.h),
            rounded(self.s),
            rounded(self.l)
        )
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[allow(clippy::cast_possible_truncation)]
fn rounded(v: f64) -> i64 {
    v.round() as i64
}

/// Wraps a hue in degrees into `[0, 360)`.
pub fn wrap_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(HUE_MAX);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if wrapped >= HUE_MAX {
        0.0
    } else {
        wrapped
    }
}

/// Clamps a percentage into `[0, 100]`.
pub fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, PERCENT_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_hue() {
        assert_eq!(wrap_hue(0.0), 0.0);
        assert_eq!(wrap_hue(359.5), 359.5);
        assert_eq!(wrap_hue(360.0), 0.0);
        assert_eq!(wrap_hue(370.0), 10.0);
        assert_eq!(wrap_hue(-30.0), 330.0);
        assert_eq!(wrap_hue(720.0), 0.0);
        assert_eq!(wrap_hue(-1e-20), 0.0);
        assert_eq!(wrap_hue(f64::NAN), 0.0);
        assert_eq!(wrap_hue(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_clamp_percent() {
        assert_eq!(clamp_percent(-10.0), 0.0);
        assert_eq!(clamp_percent(55.5), 55.5);
        assert_eq!(clamp_percent(150.0), 100.0);
        assert_eq!(clamp_percent(f64::NAN), 0.0);
        assert_eq!(clamp_percent(f64::INFINITY), 100.0);
    }

    #[test]
    fn test_normalized_wraps_hue_and_clamps_rest() {
        let hsl = HslColor::new(400.0, -10.0, 150.0).normalized();
        assert_eq!(hsl, HslColor::new(40.0, 0.0, 100.0));
    }

    #[test]
    fn test_with_helpers() {
        let base = HslColor::new(10.0, 20.0, 30.0);
        assert_eq!(base.with_hue(40.0), HslColor::new(40.0, 20.0, 30.0));
        assert_eq!(base.with_saturation(50.0), HslColor::new(10.0, 50.0, 30.0));
        assert_eq!(base.with_lightness(60.0), HslColor::new(10.0, 20.0, 60.0));
    }

    #[test]
    fn test_to_css_rounds() {
        assert_eq!(HslColor::new(209.6, 70.2, 49.5).to_css(), "hsl(210, 70%, 50%)");
        assert_eq!(HslColor::new(0.0, 0.0, 0.0).to_string(), "hsl(0, 0%, 0%)");
    }
}
