//! Copy command: put one representation on the clipboard.

use crate::cli::common::{open_popup, parse_hex, CliError, CliResult};
use crate::ui::Representation;
use clap::Args;

/// Copy the current color to the clipboard
#[derive(Debug, Clone, Args)]
pub struct CopyArgs {
    /// Representation to copy: hex, rgb, or hsl
    #[arg(value_name = "FORMAT")]
    pub format: String,

    /// Color to copy (defaults to the current color)
    #[arg(value_name = "HEX")]
    pub color: Option<String>,
}

impl CopyArgs {
    /// Execute the copy command
    pub fn execute(&self) -> CliResult<()> {
        let representation: Representation = self
            .format
            .parse()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        let color = self.color.as_deref().map(parse_hex).transpose()?;

        let (_, _, mut popup) = open_popup()?;
        if let Some(color) = &color {
            popup.apply_hex(color);
        }

        let text = popup
            .copy_text(representation)
            .map_err(|e| CliError::io(format!("{e:#}")))?;
        println!("Copied {text}");
        Ok(())
    }
}
