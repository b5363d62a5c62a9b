//! Screen color samplers.
//!
//! A sampler is the opaque capability that lets the user point at something
//! and returns its color. It is invoked with no parameters and answers with a
//! [`SamplerResponse`]:
//!
//! - `{ ok: true, hex: "#RRGGBB" }` on success
//! - `{ ok: false, error: "AbortError" }` when the user cancelled
//! - `{ ok: false, error: <reason> }` for any other failure
//!
//! The variant is chosen once per session with [`select_sampler`].

mod mock;
mod prompt;

pub use mock::MockSampler;
pub use prompt::PromptSampler;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::Config;
use crate::constants::ABORT_ERROR;

/// Reason reported by [`UnavailableSampler`].
pub const UNAVAILABLE_REASON: &str = "Color sampling is not supported in this environment";

/// Raw answer of a sampler invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplerResponse {
    /// Whether a color was sampled.
    pub ok: bool,
    /// The sampled color as reported by the sampler (not yet normalized).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    /// Failure reason, or `"AbortError"` on cancellation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SamplerResponse {
    /// A successful sample.
    pub fn picked(hex: impl Into<String>) -> Self {
        Self {
            ok: true,
            hex: Some(hex.into()),
            error: None,
        }
    }

    /// The user cancelled.
    pub fn aborted() -> Self {
        Self::failed(ABORT_ERROR)
    }

    /// Any other failure.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            hex: None,
            error: Some(reason.into()),
        }
    }

    /// True when this response signals a user cancellation.
    pub fn is_abort(&self) -> bool {
        !self.ok && self.error.as_deref() == Some(ABORT_ERROR)
    }
}

/// Host capability that samples one color from the screen.
#[async_trait]
pub trait Sampler: Send + Sync {
    /// Suspends until the user picks a color or cancels. No timeout.
    async fn sample(&self) -> SamplerResponse;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Sampler for environments without a sampling capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableSampler;

#[async_trait]
impl Sampler for UnavailableSampler {
    async fn sample(&self) -> SamplerResponse {
        SamplerResponse::failed(UNAVAILABLE_REASON)
    }

    fn name(&self) -> &'static str {
        "unavailable"
    }
}

/// Chooses the sampler for this session.
pub fn select_sampler(config: &Config) -> Arc<dyn Sampler> {
    let sampler: Arc<dyn Sampler> = if config.sampler.enabled {
        Arc::new(PromptSampler::new())
    } else {
        Arc::new(UnavailableSampler)
    };
    tracing::debug!(sampler = sampler.name(), "Selected color sampler");
    sampler
}
