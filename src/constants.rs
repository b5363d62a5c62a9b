//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the binary name, directory names, and storage keys.

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "colorpick";

/// Directory name used under the platform config and data directories.
pub const APP_DIR_NAME: &str = "ColorPick";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "COLORPICK_CONFIG_DIR";

/// Environment variable overriding the data (store) directory.
pub const DATA_DIR_ENV: &str = "COLORPICK_DATA_DIR";

/// File name of the JSON key-value store inside the data directory.
pub const STORE_FILE_NAME: &str = "store.json";

/// Storage key of the last picked color record.
pub const LAST_PICKED_KEY: &str = "last";

/// Sampler error string that signals a user cancellation.
pub const ABORT_ERROR: &str = "AbortError";
