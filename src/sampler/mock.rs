//! Scripted sampler for tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{Sampler, SamplerResponse};

/// Replays queued responses in order, then fails.
#[derive(Debug, Default)]
pub struct MockSampler {
    responses: Mutex<VecDeque<SamplerResponse>>,
    calls: AtomicUsize,
}

impl MockSampler {
    /// Creates a sampler that will answer with `responses`, in order.
    pub fn new(responses: impl IntoIterator<Item = SamplerResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Queues one more response.
    pub fn push(&self, response: SamplerResponse) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(response);
        }
    }

    /// Number of times `sample` ran.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Sampler for MockSampler {
    async fn sample(&self) -> SamplerResponse {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .ok()
            .and_then(|mut responses| responses.pop_front())
            .unwrap_or_else(|| SamplerResponse::failed("No scripted sampler response"))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replays_in_order() {
        let sampler = MockSampler::new([
            SamplerResponse::picked("#111111"),
            SamplerResponse::aborted(),
        ]);
        sampler.push(SamplerResponse::failed("boom"));

        assert_eq!(sampler.sample().await, SamplerResponse::picked("#111111"));
        assert!(sampler.sample().await.is_abort());
        assert_eq!(sampler.sample().await, SamplerResponse::failed("boom"));
        assert!(!sampler.sample().await.ok);
        assert_eq!(sampler.calls(), 4);
    }
}
