//! Pick command: sample one color through the background coordinator.

use crate::cli::common::{open_popup, print_json, CliError, CliResult};
use crate::cli::show::print_representations;
use crate::sampler::select_sampler;
use crate::services::{spawn_coordinator, PickOutcome, PickResponse, PickSession};
use clap::Args;

/// Pick a color and add it to the history
#[derive(Debug, Clone, Args)]
pub struct PickArgs {
    /// Output the pick reply as JSON
    #[arg(long)]
    pub json: bool,
}

impl PickArgs {
    /// Execute the pick command
    pub async fn execute(&self) -> CliResult<()> {
        let (config, library, mut popup) = open_popup()?;

        let session = PickSession::new(select_sampler(&config), library);
        let coordinator = spawn_coordinator(session);
        let mut picked = coordinator.subscribe();

        popup.begin_pick();
        if let Some(status) = popup.status() {
            eprintln!("{status}");
        }

        let outcome = match coordinator.pick_color().await {
            Ok(outcome) => outcome,
            Err(e) => {
                popup.apply_pick_error(&e);
                return Err(CliError::io(popup.status().unwrap_or_default()));
            }
        };
        popup.apply_pick_outcome(&outcome);

        // The coordinator broadcasts before it replies
        while let Ok(event) = picked.try_recv() {
            popup
                .on_color_picked(&event)
                .map_err(|e| CliError::io(format!("Failed to reload history: {e:#}")))?;
        }

        if self.json {
            print_json(&PickResponse::from(&outcome))?;
        } else if outcome.picked().is_some() {
            print_representations(&popup);
        } else if outcome == PickOutcome::Cancelled {
            if let Some(status) = popup.status() {
                eprintln!("{status}");
            }
        }

        match outcome {
            PickOutcome::Picked(_) | PickOutcome::Cancelled => Ok(()),
            ref failed if failed.is_save_failure() => {
                Err(CliError::io(failed.status_message()))
            }
            PickOutcome::Failed(reason) => Err(CliError::pick_failed(reason)),
        }
    }
}
