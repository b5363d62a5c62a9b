//! Shared types and helpers for CLI commands.

use serde::Serialize;
use std::fmt;

use crate::config::Config;
use crate::models::{is_valid_hex, HexColor};
use crate::store::Library;
use crate::ui::Popup;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded (a cancelled pick also counts as success)
    Success = 0,
    /// Invalid input or configuration
    Validation = 1,
    /// File, store, or clipboard failure
    Io = 2,
    /// The sampler could not produce a color
    PickFailed = 3,
}

impl ExitCode {
    /// Numeric process exit code.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by a CLI command, carrying its exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process should terminate with
    pub code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid input or configuration (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// I/O or persistence failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Pick failure (exit code 3).
    pub fn pick_failed(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::PickFailed,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the configuration file (defaults when absent).
pub fn load_config() -> CliResult<Config> {
    Config::load()
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Opens the persisted color library.
pub fn open_library(config: &Config) -> CliResult<Library> {
    Library::open(config).map_err(|e| CliError::io(format!("Failed to open color store: {e:#}")))
}

/// Loads config and opens a popup over the persisted state.
pub fn open_popup() -> CliResult<(Config, Library, Popup)> {
    let config = load_config()?;
    let library = open_library(&config)?;
    let popup = Popup::open(&library, &config.ui)
        .map_err(|e| CliError::io(format!("Failed to load saved colors: {e:#}")))?;
    Ok((config, library, popup))
}

/// Validates and normalizes a hex color argument.
pub fn parse_hex(input: &str) -> CliResult<HexColor> {
    if !is_valid_hex(input.trim()) {
        return Err(CliError::validation(format!(
            "Invalid hex color '{input}'. Expected 6 hex digits, e.g. #FF8800"
        )));
    }
    HexColor::parse(input).map_err(|e| CliError::validation(format!("{e:#}")))
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize output to JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
