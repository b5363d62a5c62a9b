//! Background coordinator.
//!
//! Uses message passing via mpsc channels: surfaces send "pick requested"
//! commands to one actor task, which runs them serially and replies over a
//! oneshot channel. Successful picks are broadcast to every subscribed
//! surface after they are persisted.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, mpsc, oneshot};

use super::pick_session::{PickOutcome, PickSession};
use crate::models::HexColor;

/// Capacity of the command queue.
const COMMAND_BUFFER: usize = 16;

/// Capacity of the broadcast channel. Slow subscribers lose old events.
const EVENT_BUFFER: usize = 64;

/// Commands handled by the coordinator.
#[derive(Debug)]
pub enum CoordinatorCommand {
    /// Invoke the sampler and reply with the outcome.
    PickColor {
        reply: oneshot::Sender<PickOutcome>,
    },
}

/// Broadcast sent to open surfaces after a successful pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPicked {
    /// The picked color, already persisted.
    pub hex: HexColor,
}

/// Handle to communicate with the coordinator task.
#[derive(Debug, Clone)]
pub struct CoordinatorHandle {
    command_tx: mpsc::Sender<CoordinatorCommand>,
    broadcast_tx: broadcast::Sender<ColorPicked>,
}

impl CoordinatorHandle {
    /// Sends a "pick requested" message and waits for the outcome.
    ///
    /// Errors only when the coordinator is gone; every pick result,
    /// including failures, comes back as a [`PickOutcome`].
    pub async fn pick_color(&self) -> Result<PickOutcome> {
        let (reply, response) = oneshot::channel();
        self.command_tx
            .send(CoordinatorCommand::PickColor { reply })
            .await
            .map_err(|_| anyhow::anyhow!("Coordinator is not running"))?;
        response
            .await
            .context("Coordinator dropped the pick request")
    }

    /// Subscribes to `ColorPicked` broadcasts sent from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<ColorPicked> {
        self.broadcast_tx.subscribe()
    }
}

/// Coordinator actor state.
struct Coordinator {
    session: PickSession,
    command_rx: mpsc::Receiver<CoordinatorCommand>,
    broadcast_tx: broadcast::Sender<ColorPicked>,
}

impl Coordinator {
    async fn run(mut self) {
        while let Some(command) = self.command_rx.recv().await {
            match command {
                CoordinatorCommand::PickColor { reply } => {
                    let outcome = self.session.request_pick().await;
                    if let PickOutcome::Picked(hex) = &outcome {
                        // No subscribers is fine: surfaces re-read on open
                        let _ = self.broadcast_tx.send(ColorPicked { hex: hex.clone() });
                    }
                    if reply.send(outcome).is_err() {
                        tracing::debug!("Pick requester went away before the reply");
                    }
                }
            }
        }
        tracing::debug!("Coordinator stopped");
    }
}

/// Spawns the coordinator on the current tokio runtime.
///
/// The task stops once every handle has been dropped.
pub fn spawn_coordinator(session: PickSession) -> CoordinatorHandle {
    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let (broadcast_tx, _) = broadcast::channel(EVENT_BUFFER);

    let coordinator = Coordinator {
        session,
        command_rx,
        broadcast_tx: broadcast_tx.clone(),
    };
    tokio::spawn(coordinator.run());

    CoordinatorHandle {
        command_tx,
        broadcast_tx,
    }
}
