//! Terminal eyedropper: the user types (or pastes) the color they pointed at.

use async_trait::async_trait;
use std::io::{self, BufRead, Write};

use super::{Sampler, SamplerResponse};

/// Reads one color per pick from standard input.
///
/// An empty line or end of input cancels. A read failure means there is no
/// surface to sample from.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptSampler;

impl PromptSampler {
    /// Creates a stdin-backed sampler.
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Sampler for PromptSampler {
    async fn sample(&self) -> SamplerResponse {
        let read = tokio::task::spawn_blocking(|| {
            let mut stderr = io::stderr();
            // Prompt goes to stderr so stdout stays machine-readable
            let _ = write!(stderr, "Pick a color (#RRGGBB, empty to cancel): ");
            let _ = stderr.flush();
            read_response(&mut io::stdin().lock())
        })
        .await;

        match read {
            Ok(response) => response,
            Err(e) => SamplerResponse::failed(format!("Sampler task failed: {e}")),
        }
    }

    fn name(&self) -> &'static str {
        "prompt"
    }
}

/// Turns one line of input into a sampler response.
fn read_response(reader: &mut impl BufRead) -> SamplerResponse {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => SamplerResponse::aborted(),
        Ok(_) => {
            let value = line.trim();
            if value.is_empty() {
                SamplerResponse::aborted()
            } else {
                SamplerResponse::picked(value)
            }
        }
        Err(e) => SamplerResponse::failed(format!("No target to sample from: {e}")),
    }
}
