//! ColorPick Library
//!
//! This library provides the core of the ColorPick color picker: HEX/RGB/HSL
//! conversion, the canonical color state and its synchronized views, the
//! de-duplicating history and palette lists, persistence, sampling, and
//! scheme generation.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod sampler;
pub mod services;
pub mod store;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use models::{Color, ColorList, HexColor, HslColor, RgbColor, SchemeKind};
pub use services::{ColorState, PickOutcome, PickSession};
pub use store::Library;
pub use ui::Popup;
