//! The single authoritative in-memory color of a surface.
//!
//! Every edit, whatever widget it came from, goes through one of the setters
//! here, so all representations are recomputed from the same HSL triple.

use crate::models::{is_valid_hex, Color, HexColor, HslColor, RgbColor};

/// Receives every change of a [`ColorState`], synchronously.
pub trait ColorObserver: Send {
    /// Called after the state changed, with the new color.
    fn on_color_changed(&mut self, color: &Color);
}

/// Result of an edit that may be rejected as malformed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The edit was applied; carries the resulting hex.
    Applied(HexColor),
    /// The input was malformed; the state is unchanged.
    Rejected,
}

impl EditOutcome {
    /// The applied hex, if any.
    pub fn applied(&self) -> Option<&HexColor> {
        match self {
            Self::Applied(hex) => Some(hex),
            Self::Rejected => None,
        }
    }
}

/// Canonical HSL color plus its registered observers.
pub struct ColorState {
    color: Color,
    observers: Vec<Box<dyn ColorObserver>>,
}

impl std::fmt::Debug for ColorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorState")
            .field("color", &self.color)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new(Color::default())
    }
}

impl ColorState {
    /// Creates a state holding `color`, with no observers.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            observers: Vec::new(),
        }
    }

    /// Registers an observer. It is not called for the current value.
    pub fn observe(&mut self, observer: Box<dyn ColorObserver>) {
        self.observers.push(observer);
    }

    /// The current color.
    pub const fn color(&self) -> &Color {
        &self.color
    }

    /// The current canonical HSL triple.
    pub const fn hsl(&self) -> HslColor {
        self.color.hsl()
    }

    /// The current hex string.
    pub const fn hex(&self) -> &HexColor {
        self.color.hex()
    }

    /// Sets the color from an HSL triple.
    ///
    /// Hue wraps into `[0, 360)`; saturation and lightness clamp to
    /// `[0, 100]`. Observers are notified before this returns.
    ///
    /// # Returns
    ///
    /// The hex of the stored color.
    pub fn set_hsl(&mut self, hsl: HslColor) -> HexColor {
        self.color = Color::from_hsl(hsl);
        for observer in &mut self.observers {
            observer.on_color_changed(&self.color);
        }
        self.color.hex().clone()
    }

    /// Sets the color from user-entered hex text.
    ///
    /// Input must match `^#?[0-9a-fA-F]{6}$`. Anything else is rejected and
    /// leaves the state (and observers) untouched.
    pub fn set_from_hex(&mut self, input: &str) -> EditOutcome {
        if !is_valid_hex(input.trim()) {
            tracing::debug!(input, "Rejected hex edit");
            return EditOutcome::Rejected;
        }
        match HexColor::parse(input) {
            Ok(hex) => EditOutcome::Applied(self.set_hsl(hex.to_rgb().to_hsl())),
            Err(_) => EditOutcome::Rejected,
        }
    }

    /// Sets the color from RGB channels, clamping each to `[0, 255]`.
    pub fn set_from_rgb(&mut self, r: i64, g: i64, b: i64) -> HexColor {
        self.set_hsl(RgbColor::clamped(r, g, b).to_hsl())
    }
}
