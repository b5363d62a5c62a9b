//! CLI command handlers for ColorPick.
//!
//! Each subcommand opens the persisted state the way a popup would, applies
//! one action, and prints the result (human-readable or `--json`).

pub mod common;
pub mod config;
pub mod convert;
pub mod copy;
pub mod palette;
pub mod pick;
pub mod scheme;
pub mod show;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use convert::ConvertArgs;
pub use copy::CopyArgs;
pub use palette::{ClearArgs, RemoveArgs, SaveArgs};
pub use pick::PickArgs;
pub use scheme::SchemeArgs;
pub use show::{ListArgs, ShowArgs};
