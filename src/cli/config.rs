//! Configuration management CLI commands.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::{Config, PopupLayout};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the config file location
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Directory holding the color store
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Number of recently picked colors to keep
    #[arg(long, value_name = "N")]
    history_capacity: Option<usize>,

    /// Popup layout (full or history_only)
    #[arg(long, value_name = "LAYOUT")]
    layout: Option<String>,

    /// Enable or disable color sampling (true or false)
    #[arg(long, value_name = "BOOL")]
    sampler: Option<bool>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    storage: StorageOutput,
    history: HistoryOutput,
    ui: UiOutput,
    sampler: SamplerOutput,
}

#[derive(Serialize, Debug)]
struct StorageOutput {
    data_dir: String,
}

#[derive(Serialize, Debug)]
struct HistoryOutput {
    capacity: usize,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    layout: PopupLayout,
    default_color: String,
    surface_width: f64,
    surface_height: f64,
}

#[derive(Serialize, Debug)]
struct SamplerOutput {
    enabled: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path().map_err(|e| {
                    CliError::io(format!("Failed to determine config path: {e:#}"))
                })?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let output = build_output(&config)?;

        if self.json {
            print_json(&output)?;
        } else {
            output_human_readable(&output);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.data_dir.is_none()
            && self.history_capacity.is_none()
            && self.layout.is_none()
            && self.sampler.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --data-dir, --history-capacity, --layout, or --sampler",
            ));
        }

        let mut config = load_config()?;

        if let Some(dir) = &self.data_dir {
            config.storage.data_dir = Some(dir.clone());
        }

        if let Some(capacity) = self.history_capacity {
            if capacity == 0 {
                return Err(CliError::validation(
                    "History capacity must be at least 1",
                ));
            }
            config.history.capacity = capacity;
        }

        if let Some(layout) = &self.layout {
            config.ui.layout = match layout.to_lowercase().as_str() {
                "full" => PopupLayout::Full,
                "history_only" | "history-only" => PopupLayout::HistoryOnly,
                _ => {
                    return Err(CliError::validation(
                        "Invalid layout. Must be 'full' or 'history_only'",
                    ))
                }
            };
        }

        if let Some(enabled) = self.sampler {
            config.sampler.enabled = enabled;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn build_output(config: &Config) -> CliResult<ConfigOutput> {
    let data_dir = config
        .storage
        .resolve_data_dir()
        .map_err(|e| CliError::io(format!("Failed to determine data directory: {e:#}")))?;

    Ok(ConfigOutput {
        storage: StorageOutput {
            data_dir: data_dir.to_string_lossy().to_string(),
        },
        history: HistoryOutput {
            capacity: config.history.capacity,
        },
        ui: UiOutput {
            layout: config.ui.layout,
            default_color: config.ui.default_color().to_css(),
            surface_width: config.ui.surface_width,
            surface_height: config.ui.surface_height,
        },
        sampler: SamplerOutput {
            enabled: config.sampler.enabled,
        },
    })
}

/// Output configuration in human-readable format
fn output_human_readable(output: &ConfigOutput) {
    println!("ColorPick Configuration");
    println!("=======================");
    println!();

    println!("Storage:");
    println!("  Data Directory: {}", output.storage.data_dir);
    println!();

    println!("History:");
    println!("  Capacity: {}", output.history.capacity);
    println!();

    println!("UI:");
    let layout = match output.ui.layout {
        PopupLayout::Full => "full",
        PopupLayout::HistoryOnly => "history_only",
    };
    println!("  Layout: {layout}");
    println!("  Default Color: {}", output.ui.default_color);
    println!(
        "  Surface: {}x{}",
        output.ui.surface_width, output.ui.surface_height
    );
    println!();

    println!("Sampler:");
    println!(
        "  Enabled: {}",
        if output.sampler.enabled { "yes" } else { "no" }
    );
    println!();
}
