//! UI sync layer.
//!
//! A [`Popup`] owns the canonical [`ColorState`](crate::services::ColorState)
//! for one open surface and fans every change out to all of its views.
//! Editor widgets are optional, selected by the configured layout.

pub mod clipboard;
mod popup;
mod views;

pub use popup::{Popup, Representation, PICKING_STATUS};
pub use views::{CursorPosition, EditorViews, PopupViews, SharedViews, SurfaceSize};
