//! One pick request, from sampler invocation to persisted outcome.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::constants::ABORT_ERROR;
use crate::models::{HexColor, LastPicked};
use crate::sampler::{Sampler, SamplerResponse};
use crate::store::Library;

/// Prefix of the failure reason when a sampled color could not be saved.
const SAVE_FAILED: &str = "Failed to save picked color";

/// How a pick request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// A color was sampled, normalized, and persisted.
    Picked(HexColor),
    /// The user aborted. Nothing changed.
    Cancelled,
    /// Sampling or persisting failed, with a human-readable reason.
    Failed(String),
}

impl PickOutcome {
    /// Status line shown to the user for this outcome.
    pub fn status_message(&self) -> String {
        match self {
            Self::Picked(hex) => format!("Picked {hex}"),
            Self::Cancelled => "Cancelled".to_string(),
            Self::Failed(reason) => reason.clone(),
        }
    }

    /// Whether the color was sampled but could not be persisted.
    pub fn is_save_failure(&self) -> bool {
        matches!(self, Self::Failed(reason) if reason.starts_with(SAVE_FAILED))
    }

    /// The picked hex, if any.
    pub fn picked(&self) -> Option<&HexColor> {
        match self {
            Self::Picked(hex) => Some(hex),
            _ => None,
        }
    }
}

/// Wire form of a [`PickOutcome`], the reply to a "pick requested" message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickResponse {
    /// Whether a color was picked.
    pub ok: bool,
    /// The picked color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<HexColor>,
    /// Failure reason, or `"AbortError"` when cancelled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&PickOutcome> for PickResponse {
    fn from(outcome: &PickOutcome) -> Self {
        match outcome {
            PickOutcome::Picked(hex) => Self {
                ok: true,
                hex: Some(hex.clone()),
                error: None,
            },
            PickOutcome::Cancelled => Self {
                ok: false,
                hex: None,
                error: Some(ABORT_ERROR.to_string()),
            },
            PickOutcome::Failed(reason) => Self {
                ok: false,
                hex: None,
                error: Some(reason.clone()),
            },
        }
    }
}

impl From<PickResponse> for PickOutcome {
    fn from(response: PickResponse) -> Self {
        match (response.ok, response.hex, response.error) {
            (true, Some(hex), _) => Self::Picked(hex),
            (true, None, _) => Self::Failed("Pick reply carried no color".to_string()),
            (false, _, Some(error)) if error == ABORT_ERROR => Self::Cancelled,
            (false, _, Some(error)) => Self::Failed(error),
            (false, _, None) => Self::Failed("Unknown pick failure".to_string()),
        }
    }
}

/// Runs pick requests against a sampler and persists successful picks.
#[derive(Clone)]
pub struct PickSession {
    sampler: Arc<dyn Sampler>,
    library: Library,
}

impl std::fmt::Debug for PickSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickSession")
            .field("sampler", &self.sampler.name())
            .field("library", &self.library)
            .finish()
    }
}

impl PickSession {
    /// Creates a session over `sampler`, persisting into `library`.
    pub fn new(sampler: Arc<dyn Sampler>, library: Library) -> Self {
        Self { sampler, library }
    }

    /// The library picks are persisted into.
    pub const fn library(&self) -> &Library {
        &self.library
    }

    /// Invokes the sampler once and persists a successful pick.
    ///
    /// History and the last-picked record are both written before a
    /// `Picked` outcome is returned. A cancelled request touches nothing.
    pub async fn request_pick(&self) -> PickOutcome {
        match self.sample_hex().await {
            Ok(hex) => self.record_pick(hex),
            Err(outcome) => outcome,
        }
    }

    async fn sample_hex(&self) -> Result<HexColor, PickOutcome> {
        tracing::info!(sampler = self.sampler.name(), "Starting color pick");
        let response = self.sampler.sample().await;
        let hex = normalize_response(response)?;
        tracing::debug!(%hex, "Sampler returned a color");
        Ok(hex)
    }

    fn record_pick(&self, hex: HexColor) -> PickOutcome {
        match self.persist_pick(&hex) {
            Ok(()) => {
                tracing::info!(%hex, "Picked color");
                PickOutcome::Picked(hex)
            }
            Err(e) => {
                tracing::warn!(%hex, "Picked color was not persisted: {e:#}");
                PickOutcome::Failed(format!("{SAVE_FAILED}: {e:#}"))
            }
        }
    }

    fn persist_pick(&self, hex: &HexColor) -> Result<()> {
        let mut history = self.library.history()?;
        history.record(hex.clone())?;
        self.library.save_last(&LastPicked::now(hex.clone()))
    }
}

/// Maps a raw sampler response onto a normalized hex or a final outcome.
fn normalize_response(response: SamplerResponse) -> Result<HexColor, PickOutcome> {
    if response.is_abort() {
        tracing::info!("Color pick cancelled");
        return Err(PickOutcome::Cancelled);
    }
    if !response.ok {
        let reason = response
            .error
            .unwrap_or_else(|| "Unknown sampler error".to_string());
        tracing::warn!("Color pick failed: {reason}");
        return Err(PickOutcome::Failed(reason));
    }

    let raw = response
        .hex
        .ok_or_else(|| PickOutcome::Failed("Sampler returned no color".to_string()))?;
    HexColor::parse(&raw).map_err(|_| {
        tracing::warn!(raw = %raw, "Sampler returned an invalid color");
        PickOutcome::Failed(format!("Sampler returned an invalid color: {raw}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ListKind;
    use crate::sampler::MockSampler;
    use crate::store::{KeyValueStore, MemoryStore};
    use serde_json::json;

    fn session_with(responses: Vec<SamplerResponse>) -> (PickSession, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let library = Library::new(store.clone(), 15);
        let sampler = Arc::new(MockSampler::new(responses));
        (PickSession::new(sampler, library), store)
    }

    fn hex(s: &str) -> HexColor {
        HexColor::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_pick_normalizes_and_persists() {
        let (session, store) = session_with(vec![SamplerResponse::picked("#ff8800")]);

        let outcome = session.request_pick().await;
        assert_eq!(outcome, PickOutcome::Picked(hex("#FF8800")));

        assert_eq!(store.get("history").unwrap(), Some(json!(["#FF8800"])));
        let last = session.library().load_last().unwrap().unwrap();
        assert_eq!(last.hex, hex("#FF8800"));
        assert!(last.at > 0);
    }

    #[tokio::test]
    async fn test_cancel_is_a_no_op() {
        let (session, store) = session_with(vec![
            SamplerResponse::picked("#123456"),
            SamplerResponse::aborted(),
        ]);
        session.request_pick().await;
        session
            .library()
            .palette()
            .unwrap()
            .record(hex("#ABCDEF"))
            .unwrap();

        let history_before = store.get("history").unwrap();
        let palette_before = store.get("palette").unwrap();
        let last_before = store.get("last").unwrap();

        let outcome = session.request_pick().await;
        assert_eq!(outcome, PickOutcome::Cancelled);
        assert_eq!(store.get("history").unwrap(), history_before);
        assert_eq!(store.get("palette").unwrap(), palette_before);
        assert_eq!(store.get("last").unwrap(), last_before);
    }

    #[tokio::test]
    async fn test_failure_carries_reason() {
        let (session, store) = session_with(vec![
            SamplerResponse::failed("No active tab"),
            SamplerResponse::picked("not a color"),
        ]);

        assert_eq!(
            session.request_pick().await,
            PickOutcome::Failed("No active tab".to_string())
        );
        assert!(matches!(
            session.request_pick().await,
            PickOutcome::Failed(reason) if reason.contains("invalid color")
        ));
        assert_eq!(store.get("history").unwrap(), None);
        assert_eq!(store.get("last").unwrap(), None);
    }

    #[tokio::test]
    async fn test_persistence_failure_is_reported() {
        let (session, store) = session_with(vec![SamplerResponse::picked("#010203")]);
        store.set_fail_writes(true);

        let outcome = session.request_pick().await;
        assert!(outcome.is_save_failure());
        assert_eq!(outcome.picked(), None);
        assert!(!PickOutcome::Failed("No active tab".to_string()).is_save_failure());
    }

    #[tokio::test]
    async fn test_repeated_picks_dedup_history() {
        let (session, _) = session_with(vec![
            SamplerResponse::picked("#AAAAAA"),
            SamplerResponse::picked("#BBBBBB"),
            SamplerResponse::picked("#aaaaaa"),
        ]);
        for _ in 0..3 {
            session.request_pick().await;
        }
        let history = session.library().load_list(ListKind::History).unwrap();
        let entries: Vec<&str> = history.iter().map(HexColor::as_str).collect();
        assert_eq!(entries, ["#AAAAAA", "#BBBBBB"]);
    }

    #[test]
    fn test_pick_response_wire_form() {
        let picked = PickOutcome::Picked(hex("#FF0000"));
        assert_eq!(
            serde_json::to_value(PickResponse::from(&picked)).unwrap(),
            json!({"ok": true, "hex": "#FF0000"})
        );
        assert_eq!(
            serde_json::to_value(PickResponse::from(&PickOutcome::Cancelled)).unwrap(),
            json!({"ok": false, "error": "AbortError"})
        );

        let parsed: PickResponse =
            serde_json::from_value(json!({"ok": false, "error": "AbortError"})).unwrap();
        assert_eq!(PickOutcome::from(parsed), PickOutcome::Cancelled);
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(PickOutcome::Cancelled.status_message(), "Cancelled");
        assert_eq!(
            PickOutcome::Picked(hex("#000000")).status_message(),
            "Picked #000000"
        );
        assert_eq!(
            PickOutcome::Failed("No target".to_string()).status_message(),
            "No target"
        );
    }
}
