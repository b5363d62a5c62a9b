//! Scheme generation command.

use crate::cli::common::{open_popup, parse_hex, print_json, CliError, CliResult};
use crate::models::{HexColor, SchemeKind};
use clap::Args;
use serde::Serialize;

/// Generate a color scheme
#[derive(Debug, Clone, Args)]
pub struct SchemeArgs {
    /// Scheme kind: monochromatic (mono) or complementary (comp)
    #[arg(value_name = "KIND")]
    pub kind: String,

    /// Base color (defaults to the current color)
    #[arg(value_name = "HEX")]
    pub color: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SchemeOutput<'a> {
    scheme: SchemeKind,
    base: &'a HexColor,
    colors: &'a [HexColor],
}

impl SchemeArgs {
    /// Execute the scheme command
    pub fn execute(&self) -> CliResult<()> {
        let kind: SchemeKind = self
            .kind
            .parse()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        let base = self.color.as_deref().map(parse_hex).transpose()?;

        let (_, _, mut popup) = open_popup()?;
        if let Some(base) = &base {
            popup.apply_hex(base);
        }

        let base = popup.color().hex().clone();
        let colors = popup.generate(kind);

        if self.json {
            return print_json(&SchemeOutput {
                scheme: kind,
                base: &base,
                colors,
            });
        }

        for hex in colors {
            println!("{hex}");
        }
        Ok(())
    }
}
