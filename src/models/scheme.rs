//! Generated color schemes derived from a single HSL color.
//!
//! Both generators are pure and deterministic: the same input always yields
//! the same five colors in the same order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::hsl::{clamp_percent, wrap_hue};
use super::{HexColor, HslColor};

/// Lightness offsets of the monochromatic ladder, darkest first.
const MONOCHROMATIC_STEPS: [f64; 5] = [-30.0, -15.0, 0.0, 15.0, 30.0];

/// Kind of scheme to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeKind {
    /// Same hue and saturation at five lightness levels.
    Monochromatic,
    /// The base hue and its opposite at a few variations.
    Complementary,
}

impl SchemeKind {
    /// Generates this scheme for `base`.
    #[must_use]
    pub fn generate(self, base: HslColor) -> Vec<HexColor> {
        match self {
            Self::Monochromatic => build_monochromatic(base),
            Self::Complementary => build_complementary(base),
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monochromatic => write!(f, "monochromatic"),
            Self::Complementary => write!(f, "complementary"),
        }
    }
}

impl FromStr for SchemeKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mono" | "monochromatic" => Ok(Self::Monochromatic),
            "comp" | "complementary" => Ok(Self::Complementary),
            other => anyhow::bail!(
                "Unknown scheme '{other}'. Expected 'monochromatic' or 'complementary'"
            ),
        }
    }
}

/// Five colors at lightness offsets -30, -15, 0, +15, +30 from `base`.
///
/// Each lightness is clamped to `[0, 100]` before conversion.
#[must_use]
pub fn build_monochromatic(base: HslColor) -> Vec<HexColor> {
    MONOCHROMATIC_STEPS
        .iter()
        .map(|dl| to_hex(base.with_lightness(clamp_percent(base.l + dl))))
        .collect()
}

/// Five colors built around `base` and its complement (hue + 180).
///
/// Order: base hue at lightness -20, base as is, complement, complement at
/// lightness +15, complement at saturation -15.
///
/// ```
/// use colorpick::models::{build_complementary, HslColor};
///
/// let scheme = build_complementary(HslColor::new(210.0, 70.0, 50.0));
/// assert_eq!(scheme.len(), 5);
/// assert_eq!(scheme, build_complementary(HslColor::new(210.0, 70.0, 50.0)));
/// ```
#[must_use]
pub fn build_complementary(base: HslColor) -> Vec<HexColor> {
    let opposite = wrap_hue(base.h + 180.0);
    let variants = [
        base.with_lightness(base.l - 20.0),
        base,
        base.with_hue(opposite),
        base.with_hue(opposite).with_lightness(base.l + 15.0),
        base.with_hue(opposite).with_saturation(base.s - 15.0),
    ];
    variants
        .into_iter()
        .map(|v| to_hex(HslColor::new(v.h, clamp_percent(v.s), clamp_percent(v.l))))
        .collect()
}

fn to_hex(hsl: HslColor) -> HexColor {
    HexColor::from_rgb(hsl.to_rgb())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monochromatic_ladder() {
        let scheme = build_monochromatic(HslColor::new(0.0, 100.0, 50.0));
        let expected: Vec<HexColor> = [20.0, 35.0, 50.0, 65.0, 80.0]
            .iter()
            .map(|&l| HexColor::from_rgb(HslColor::new(0.0, 100.0, l).to_rgb()))
            .collect();
        assert_eq!(scheme, expected);
        assert_eq!(scheme[2].as_str(), "#FF0000");
    }

    #[test]
    fn test_monochromatic_clamps_lightness() {
        let scheme = build_monochromatic(HslColor::new(120.0, 50.0, 90.0));
        // +15 and +30 both clamp to 100 (white)
        assert_eq!(scheme[3].as_str(), "#FFFFFF");
        assert_eq!(scheme[4].as_str(), "#FFFFFF");

        let scheme = build_monochromatic(HslColor::new(120.0, 50.0, 10.0));
        assert_eq!(scheme[0].as_str(), "#000000");
        assert_eq!(scheme[1].as_str(), "#000000");
    }

    #[test]
    fn test_complementary_order() {
        let base = HslColor::new(210.0, 70.0, 50.0);
        let scheme = build_complementary(base);
        let expected: Vec<HexColor> = [
            HslColor::new(210.0, 70.0, 30.0),
            HslColor::new(210.0, 70.0, 50.0),
            HslColor::new(30.0, 70.0, 50.0),
            HslColor::new(30.0, 70.0, 65.0),
            HslColor::new(30.0, 55.0, 50.0),
        ]
        .iter()
        .map(|hsl| HexColor::from_rgb(hsl.to_rgb()))
        .collect();
        assert_eq!(scheme, expected);
    }

    #[test]
    fn test_complementary_is_deterministic() {
        let base = HslColor::new(210.0, 70.0, 50.0);
        let first = build_complementary(base);
        for _ in 0..10 {
            assert_eq!(build_complementary(base), first);
        }
    }

    #[test]
    fn test_complementary_wraps_hue() {
        let scheme = build_complementary(HslColor::new(300.0, 100.0, 50.0));
        // 300 + 180 wraps to 120 (green)
        assert_eq!(scheme[2].as_str(), "#00FF00");
    }

    #[test]
    fn test_complementary_clamps_secondary_channels() {
        let scheme = build_complementary(HslColor::new(0.0, 10.0, 10.0));
        // lightness 10 - 20 clamps to 0
        assert_eq!(scheme[0].as_str(), "#000000");
        // saturation 10 - 15 clamps to 0 (gray at l=10)
        let gray = HexColor::from_rgb(HslColor::new(0.0, 0.0, 10.0).to_rgb());
        assert_eq!(scheme[4], gray);
    }

    #[test]
    fn test_scheme_kind_parse() {
        assert_eq!("mono".parse::<SchemeKind>().unwrap(), SchemeKind::Monochromatic);
        assert_eq!(
            "Complementary".parse::<SchemeKind>().unwrap(),
            SchemeKind::Complementary
        );
        assert!("triadic".parse::<SchemeKind>().is_err());
    }

    #[test]
    fn test_scheme_kind_generate_dispatches() {
        let base = HslColor::new(45.0, 60.0, 40.0);
        assert_eq!(
            SchemeKind::Monochromatic.generate(base),
            build_monochromatic(base)
        );
        assert_eq!(
            SchemeKind::Complementary.generate(base),
            build_complementary(base)
        );
    }
}
