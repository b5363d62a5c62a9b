//! Palette and history editing commands.

use crate::cli::common::{open_popup, parse_hex, CliError, CliResult};
use clap::{Args, ValueEnum};

/// Save a color to the palette
#[derive(Debug, Clone, Args)]
pub struct SaveArgs {
    /// Color to save (defaults to the current color)
    #[arg(value_name = "HEX")]
    pub color: Option<String>,
}

/// Remove a color from the palette
#[derive(Debug, Clone, Args)]
pub struct RemoveArgs {
    /// Color to remove
    #[arg(value_name = "HEX")]
    pub color: String,
}

/// Clear saved colors
#[derive(Debug, Clone, Args)]
pub struct ClearArgs {
    /// Which list to clear
    #[arg(value_enum)]
    pub target: ClearTarget,
}

/// Lists that can be cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClearTarget {
    /// Recently picked colors
    History,
    /// Saved colors
    Palette,
    /// Both lists
    All,
}

impl SaveArgs {
    /// Execute the save command
    pub fn execute(&self) -> CliResult<()> {
        let (_, _, mut popup) = open_popup()?;

        if let Some(color) = &self.color {
            let hex = parse_hex(color)?;
            popup.apply_hex(&hex);
        }

        let hex = popup
            .save_to_palette()
            .map_err(|e| CliError::io(format!("Failed to save palette: {e:#}")))?;
        println!("Saved {hex} to palette");
        Ok(())
    }
}

impl RemoveArgs {
    /// Execute the remove command
    pub fn execute(&self) -> CliResult<()> {
        let hex = parse_hex(&self.color)?;
        let (_, _, mut popup) = open_popup()?;

        let removed = popup
            .remove_from_palette(&hex)
            .map_err(|e| CliError::io(format!("Failed to save palette: {e:#}")))?;
        if removed {
            println!("Removed {hex} from palette");
        } else {
            println!("{hex} is not in the palette");
        }
        Ok(())
    }
}

impl ClearArgs {
    /// Execute the clear command
    pub fn execute(&self) -> CliResult<()> {
        let (_, _, mut popup) = open_popup()?;

        if matches!(self.target, ClearTarget::History | ClearTarget::All) {
            popup
                .clear_history()
                .map_err(|e| CliError::io(format!("Failed to clear history: {e:#}")))?;
            println!("History cleared");
        }
        if matches!(self.target, ClearTarget::Palette | ClearTarget::All) {
            popup
                .clear_palette()
                .map_err(|e| CliError::io(format!("Failed to clear palette: {e:#}")))?;
            println!("Palette cleared");
        }
        Ok(())
    }
}
