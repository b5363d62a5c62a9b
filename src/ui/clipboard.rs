//! System clipboard access for the copy actions.

use anyhow::Result;

/// Places `text` on the system clipboard.
#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
        .map_err(|e| anyhow::anyhow!("Failed to copy to clipboard: {e}"))?;
    tracing::debug!("Copied {text} to clipboard");
    Ok(())
}

/// Places `text` on the system clipboard.
///
/// This build has no clipboard support, so this always fails.
#[cfg(not(feature = "clipboard"))]
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    anyhow::bail!("Clipboard support is not enabled in this build (tried to copy {text})")
}
