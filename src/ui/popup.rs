//! The popup surface: one [`ColorState`] driving every view, plus the
//! history, palette, and generated-swatch areas.
//!
//! A popup is constructed on open, rehydrated from the store, and discarded
//! on close. Nothing here outlives the surface except what it persisted.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::clipboard::copy_to_clipboard;
use super::views::{PopupViews, SharedViews, SurfaceSize};
use crate::config::{PopupLayout, UiConfig};
use crate::models::{Color, ColorList, HexColor, SchemeKind};
use crate::services::{ColorPicked, ColorState, EditOutcome, PickOutcome};
use crate::store::{Library, ListStore};

/// Status shown while a pick is in flight.
pub const PICKING_STATUS: &str = "Picking… enter the color you pointed at";

/// One of the three textual color representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// `#RRGGBB`
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `hsl(h, s%, l%)`
    Hsl,
}

impl Representation {
    /// All representations, in display order.
    pub const ALL: [Self; 3] = [Self::Hex, Self::Rgb, Self::Hsl];

    /// The text of this representation in `views`.
    pub fn text_in(self, views: &PopupViews) -> &str {
        match self {
            Self::Hex => &views.hex_text,
            Self::Rgb => &views.rgb_text,
            Self::Hsl => &views.hsl_text,
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex => write!(f, "hex"),
            Self::Rgb => write!(f, "rgb"),
            Self::Hsl => write!(f, "hsl"),
        }
    }
}

impl FromStr for Representation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "hsl" => Ok(Self::Hsl),
            other => anyhow::bail!("Unknown format '{other}'. Expected 'hex', 'rgb', or 'hsl'"),
        }
    }
}

/// The popup surface.
#[derive(Debug)]
pub struct Popup {
    state: ColorState,
    views: SharedViews,
    layout: PopupLayout,
    surface: SurfaceSize,
    history: ListStore,
    palette: ListStore,
    generated: Vec<HexColor>,
    status: Option<String>,
}

impl Popup {
    /// Opens a popup, rehydrating lists and the last pick from `library`.
    ///
    /// Shows the last picked color, or the configured default when nothing
    /// was ever picked.
    pub fn open(library: &Library, ui: &UiConfig) -> Result<Self> {
        let history = library.history()?;
        let palette = library.palette()?;
        let color = match library.load_last()? {
            Some(last) => Color::from_hex(&last.hex),
            None => Color::from_hsl(ui.default_color()),
        };

        let surface = SurfaceSize {
            width: ui.surface_width,
            height: ui.surface_height,
        };
        let views = SharedViews::new(PopupViews::showing(ui.layout, surface, &color));
        let mut state = ColorState::new(color);
        state.observe(Box::new(views.clone()));
        tracing::debug!(
            hex = %state.hex(),
            history = history.list().len(),
            palette = palette.list().len(),
            "Opened popup"
        );

        Ok(Self {
            state,
            views,
            layout: ui.layout,
            surface,
            history,
            palette,
            generated: Vec::new(),
            status: None,
        })
    }

    /// The current color.
    pub const fn color(&self) -> &Color {
        self.state.color()
    }

    /// Every view of the current color.
    pub fn views(&self) -> PopupViews {
        self.views.snapshot()
    }

    /// The layout this popup was opened with.
    pub const fn layout(&self) -> PopupLayout {
        self.layout
    }

    /// History swatches, most recent first.
    pub const fn history(&self) -> &ColorList {
        self.history.list()
    }

    /// Palette swatches, most recent first.
    pub const fn palette(&self) -> &ColorList {
        self.palette.list()
    }

    /// Swatches of the last generated scheme.
    pub fn generated(&self) -> &[HexColor] {
        &self.generated
    }

    /// The current status line, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// The text of one representation of the current color.
    pub fn text(&self, representation: Representation) -> String {
        representation.text_in(&self.views()).to_string()
    }

    fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    /// Records a failed action in the status line and passes it on.
    fn track<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            self.set_status(format!("Error: {e:#}"));
        }
        result
    }

    // Fan-in: every widget edit converges on ColorState

    /// The hex field changed. Malformed input reverts the field.
    pub fn on_hex_input(&mut self, text: &str) -> EditOutcome {
        self.state.set_from_hex(text)
    }

    /// One of the RGB fields changed.
    ///
    /// An empty field counts as 0 and values clamp to 0-255. A non-numeric
    /// field rejects the edit and reverts the fields.
    pub fn on_rgb_input(&mut self, r: &str, g: &str, b: &str) -> EditOutcome {
        match (parse_channel(r), parse_channel(g), parse_channel(b)) {
            (Some(r), Some(g), Some(b)) => EditOutcome::Applied(self.state.set_from_rgb(r, g, b)),
            _ => {
                tracing::debug!(r, g, b, "Rejected RGB edit");
                EditOutcome::Rejected
            }
        }
    }

    /// The hue slider moved.
    pub fn on_hue_change(&mut self, hue: f64) -> HexColor {
        let hsl = self.state.hsl().with_hue(hue);
        self.state.set_hsl(hsl)
    }

    /// The pointer was dragged to `(x, y)` on the saturation/lightness
    /// surface. Positions outside the surface clamp to its edges.
    pub fn on_surface_drag(&mut self, x: f64, y: f64) -> HexColor {
        let (s, l) = self.surface.saturation_lightness_at(x, y);
        let hsl = self.state.hsl().with_saturation(s).with_lightness(l);
        self.state.set_hsl(hsl)
    }

    /// Makes `hex` the current color (swatch click or broadcast).
    pub fn apply_hex(&mut self, hex: &HexColor) -> HexColor {
        self.state.set_hsl(Color::from_hex(hex).hsl())
    }

    // Actions

    /// A pick was requested.
    pub fn begin_pick(&mut self) {
        self.set_status(PICKING_STATUS);
    }

    /// Shows the outcome of a pick in the status line.
    ///
    /// The picked color itself arrives like any other surface's, through
    /// [`on_color_picked`](Self::on_color_picked).
    pub fn apply_pick_outcome(&mut self, outcome: &PickOutcome) {
        self.set_status(outcome.status_message());
    }

    /// The pick request itself could not be delivered.
    pub fn apply_pick_error(&mut self, error: &anyhow::Error) {
        self.set_status(format!("Error: {error:#}"));
    }

    /// A pick completed: applies the color and re-reads the history the
    /// pick just wrote.
    pub fn on_color_picked(&mut self, event: &ColorPicked) -> Result<()> {
        self.apply_hex(&event.hex);
        self.refresh_history()
    }

    /// Saves the current color to the palette.
    pub fn save_to_palette(&mut self) -> Result<HexColor> {
        let hex = self.state.hex().clone();
        let result = self.palette.record(hex.clone());
        self.track(result)?;
        self.set_status(format!("Saved {hex} to palette"));
        Ok(hex)
    }

    /// Removes `hex` from the palette. Returns whether it was there.
    pub fn remove_from_palette(&mut self, hex: &HexColor) -> Result<bool> {
        let result = self.palette.remove(hex);
        self.track(result)
    }

    /// Empties the history.
    pub fn clear_history(&mut self) -> Result<()> {
        let result = self.history.clear();
        self.track(result)
    }

    /// Empties the palette.
    pub fn clear_palette(&mut self) -> Result<()> {
        let result = self.palette.clear();
        self.track(result)
    }

    /// Re-reads the history from the store.
    pub fn refresh_history(&mut self) -> Result<()> {
        let result = self.history.reload();
        self.track(result)
    }

    /// Fills the generated-swatches area from the current color.
    pub fn generate(&mut self, kind: SchemeKind) -> &[HexColor] {
        self.generated = kind.generate(self.state.hsl());
        &self.generated
    }

    /// Copies one representation of the current color to the clipboard.
    pub fn copy_text(&mut self, representation: Representation) -> Result<String> {
        let text = self.text(representation);
        let result = copy_to_clipboard(&text);
        self.track(result)?;
        self.set_status(format!("Copied {text}"));
        Ok(text)
    }
}

/// Parses an RGB field: empty is 0, anything non-integer is rejected.
fn parse_channel(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0);
    }
    text.parse().ok()
}
