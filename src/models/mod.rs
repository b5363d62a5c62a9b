//! Data models for colors, color lists, and generated schemes.
//!
//! This module contains the pure color math and list maintenance used
//! throughout the application. Models are independent of persistence, the
//! sampler, and any UI surface.

pub mod color;
pub mod color_list;
pub mod hex;
pub mod hsl;
pub mod last_picked;
pub mod rgb;
pub mod scheme;

// Re-export all model types
pub use color::Color;
pub use color_list::{ColorList, ListKind, DEFAULT_HISTORY_CAPACITY};
pub use hex::{is_valid_hex, HexColor};
pub use hsl::HslColor;
pub use last_picked::LastPicked;
pub use rgb::RgbColor;
pub use scheme::{build_complementary, build_monochromatic, SchemeKind};
