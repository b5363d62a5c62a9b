//! Convert command: one color in, all three representations out.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::models::{HexColor, HslColor, RgbColor};
use crate::services::{ColorState, EditOutcome};
use clap::Args;
use serde::Serialize;

/// Convert a color between HEX, RGB, and HSL
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Hex color (#RRGGBB, # optional)
    #[arg(
        value_name = "HEX",
        required_unless_present_any = ["rgb", "hsl"],
        conflicts_with_all = ["rgb", "hsl"]
    )]
    pub hex: Option<String>,

    /// RGB channels (clamped to 0-255)
    #[arg(
        long,
        num_args = 3,
        value_names = ["R", "G", "B"],
        allow_negative_numbers = true,
        conflicts_with = "hsl"
    )]
    pub rgb: Option<Vec<i64>>,

    /// HSL components (hue wraps, saturation and lightness clamp to 0-100)
    #[arg(
        long,
        num_args = 3,
        value_names = ["H", "S", "L"],
        allow_negative_numbers = true
    )]
    pub hsl: Option<Vec<f64>>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ConvertOutput {
    hex: HexColor,
    rgb: RgbColor,
    hsl: HslColor,
    rgb_text: String,
    hsl_text: String,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> CliResult<()> {
        let mut state = ColorState::default();

        match (&self.hex, self.rgb.as_deref(), self.hsl.as_deref()) {
            (Some(hex), _, _) => {
                if state.set_from_hex(hex) == EditOutcome::Rejected {
                    return Err(CliError::validation(format!(
                        "Invalid hex color '{hex}'. Expected 6 hex digits, e.g. #FF8800"
                    )));
                }
            }
            (None, Some(&[r, g, b]), _) => {
                state.set_from_rgb(r, g, b);
            }
            (None, None, Some(&[h, s, l])) => {
                state.set_hsl(HslColor::new(h, s, l));
            }
            _ => {
                return Err(CliError::validation(
                    "Provide a hex color, --rgb R G B, or --hsl H S L",
                ))
            }
        }

        let color = state.color();
        let output = ConvertOutput {
            hex: color.hex().clone(),
            rgb: color.rgb(),
            hsl: color.hsl(),
            rgb_text: color.rgb().to_css(),
            hsl_text: color.hsl().to_css(),
        };

        if self.json {
            print_json(&output)?;
        } else {
            println!("hex {}", output.hex);
            println!("rgb {}", output.rgb_text);
            println!("hsl {}", output.hsl_text);
        }
        Ok(())
    }
}
