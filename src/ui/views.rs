//! Derived view state of the popup.
//!
//! Every field here is recomputed from one [`Color`] snapshot in a single
//! call, so no representation can lag another.

// Hue is rounded to whole degrees for the slider
#![allow(clippy::cast_possible_truncation)]

use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::PopupLayout;
use crate::models::{Color, HslColor};
use crate::services::ColorObserver;

/// Pixel size of the saturation/lightness surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl SurfaceSize {
    /// Cursor position for `hsl`: saturation left to right, lightness top
    /// (100%) to bottom (0%).
    pub fn cursor_for(self, hsl: HslColor) -> CursorPosition {
        CursorPosition {
            x: hsl.s / 100.0 * self.width,
            y: (100.0 - hsl.l) / 100.0 * self.height,
        }
    }

    /// Saturation and lightness under a pointer at `(x, y)`, clamped to the
    /// surface.
    pub fn saturation_lightness_at(self, x: f64, y: f64) -> (f64, f64) {
        let x = clamp_finite(x, self.width);
        let y = clamp_finite(y, self.height);
        (x / self.width * 100.0, 100.0 - y / self.height * 100.0)
    }
}

fn clamp_finite(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

/// Cursor position on the saturation/lightness surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CursorPosition {
    /// Horizontal offset in pixels.
    pub x: f64,
    /// Vertical offset in pixels.
    pub y: f64,
}

/// Editor widget state, present in the full layout only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorViews {
    /// Text of the hex input field.
    pub hex_input: String,
    /// Text of the red, green, and blue number fields.
    pub rgb_inputs: [String; 3],
    /// Hue slider position in whole degrees.
    pub hue_slider: i64,
    /// Base fill of the surface, the fully saturated hue.
    pub surface_fill: String,
    /// Cursor on the surface.
    pub cursor: CursorPosition,
    /// Fill of the current-color chip.
    pub chip: String,
    #[serde(skip)]
    surface: SurfaceSize,
}

impl EditorViews {
    fn new(surface: SurfaceSize) -> Self {
        Self {
            hex_input: String::new(),
            rgb_inputs: Default::default(),
            hue_slider: 0,
            surface_fill: String::new(),
            cursor: CursorPosition { x: 0.0, y: 0.0 },
            chip: String::new(),
            surface,
        }
    }

    /// Size of the surface the cursor is laid out on.
    pub const fn surface(&self) -> SurfaceSize {
        self.surface
    }

    fn update(&mut self, color: &Color) {
        let hsl = color.hsl();
        let rgb = color.rgb();
        self.hex_input = color.hex().to_string();
        self.rgb_inputs = [rgb.r.to_string(), rgb.g.to_string(), rgb.b.to_string()];
        self.hue_slider = hsl.h.round() as i64;
        self.surface_fill = format!("hsl({}, 100%, 50%)", self.hue_slider);
        self.cursor = self.surface.cursor_for(hsl);
        self.chip = color.hex().to_string();
    }
}

/// Every representation the popup shows for the current color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupViews {
    /// `#RRGGBB`
    pub hex_text: String,
    /// `rgb(r, g, b)`
    pub rgb_text: String,
    /// `hsl(h, s%, l%)`
    pub hsl_text: String,
    /// Fill of the live preview.
    pub preview_fill: String,
    /// Editor widgets, when the layout has them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<EditorViews>,
}

impl PopupViews {
    /// Creates empty views for `layout`.
    pub fn new(layout: PopupLayout, surface: SurfaceSize) -> Self {
        Self {
            hex_text: String::new(),
            rgb_text: String::new(),
            hsl_text: String::new(),
            preview_fill: String::new(),
            editor: layout.has_editor().then(|| EditorViews::new(surface)),
        }
    }

    /// Creates views for `layout` already showing `color`.
    pub fn showing(layout: PopupLayout, surface: SurfaceSize, color: &Color) -> Self {
        let mut views = Self::new(layout, surface);
        views.on_color_changed(color);
        views
    }
}

impl ColorObserver for PopupViews {
    fn on_color_changed(&mut self, color: &Color) {
        self.hex_text = color.hex().to_string();
        self.rgb_text = color.rgb().to_css();
        self.hsl_text = color.hsl().to_css();
        self.preview_fill = color.hex().to_string();
        if let Some(editor) = &mut self.editor {
            editor.update(color);
        }
    }
}

/// [`PopupViews`] shared between a popup and the color state that keeps
/// them current.
///
/// The state holds one clone as a registered observer; the popup reads
/// snapshots through another.
#[derive(Debug, Clone)]
pub struct SharedViews(Arc<Mutex<PopupViews>>);

impl SharedViews {
    /// Wraps `views` for sharing.
    pub fn new(views: PopupViews) -> Self {
        Self(Arc::new(Mutex::new(views)))
    }

    /// A copy of the views as they are now.
    pub fn snapshot(&self) -> PopupViews {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, PopupViews> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ColorObserver for SharedViews {
    fn on_color_changed(&mut self, color: &Color) {
        self.lock().on_color_changed(color);
    }
}
