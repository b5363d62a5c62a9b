//! Show and list commands: the popup's readouts and swatch lists.

use crate::cli::common::{open_popup, print_json, CliError, CliResult};
use crate::models::HexColor;
use crate::ui::{Popup, PopupViews, Representation};
use clap::{Args, ValueEnum};
use serde::Serialize;

/// Show the current color and saved colors
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// List history or palette entries
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Which list to print (both when omitted)
    #[arg(value_enum)]
    pub list: Option<ListChoice>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// A persisted color list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListChoice {
    /// Recently picked colors
    History,
    /// Saved colors
    Palette,
}

#[derive(Debug, Serialize)]
struct LastPickedOutput {
    hex: HexColor,
    at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    picked_at: Option<String>,
}

#[derive(Debug, Serialize)]
struct ShowOutput<'a> {
    views: &'a PopupViews,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_picked: Option<LastPickedOutput>,
    history: &'a [HexColor],
    palette: &'a [HexColor],
}

#[derive(Debug, Serialize)]
struct ListOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    history: Option<&'a [HexColor]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    palette: Option<&'a [HexColor]>,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let (_, library, popup) = open_popup()?;
        let last = library
            .load_last()
            .map_err(|e| CliError::io(format!("Failed to load last picked color: {e:#}")))?;

        if self.json {
            let views = popup.views();
            let output = ShowOutput {
                views: &views,
                last_picked: last.map(|last| LastPickedOutput {
                    picked_at: last.picked_at().map(|at| at.to_rfc3339()),
                    hex: last.hex,
                    at: last.at,
                }),
                history: popup.history().as_slice(),
                palette: popup.palette().as_slice(),
            };
            return print_json(&output);
        }

        print_representations(&popup);
        println!();
        match last.as_ref().and_then(|last| Some((last, last.picked_at()?))) {
            Some((last, at)) => println!("Last picked: {} at {}", last.hex, at.to_rfc3339()),
            None => println!("Last picked: (none)"),
        }
        print_swatches("History", popup.history().as_slice());
        print_swatches("Palette", popup.palette().as_slice());
        Ok(())
    }
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let (_, _, popup) = open_popup()?;
        let history = (self.list != Some(ListChoice::Palette)).then(|| popup.history().as_slice());
        let palette = (self.list != Some(ListChoice::History)).then(|| popup.palette().as_slice());

        if self.json {
            return print_json(&ListOutput { history, palette });
        }

        match (history, palette) {
            // A single list prints one hex per line for scripting
            (Some(entries), None) | (None, Some(entries)) => {
                for hex in entries {
                    println!("{hex}");
                }
            }
            (history, palette) => {
                print_swatches("History", history.unwrap_or_default());
                print_swatches("Palette", palette.unwrap_or_default());
            }
        }
        Ok(())
    }
}

/// Prints the hex, rgb, and hsl readouts of the popup's current color.
pub fn print_representations(popup: &Popup) {
    for representation in Representation::ALL {
        println!("{:<4}{}", representation.to_string(), popup.text(representation));
    }
}

fn print_swatches(label: &str, entries: &[HexColor]) {
    if entries.is_empty() {
        println!("{label} (0): (empty)");
        return;
    }
    let joined = entries
        .iter()
        .map(HexColor::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    println!("{label} ({}): {joined}", entries.len());
}
