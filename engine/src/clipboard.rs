//! Copy-to-clipboard action with transient success feedback.
//!
//! A failed write is logged and otherwise swallowed: no retry, no error UI,
//! the control simply never shows its success badge.

use std::time::Duration;

use anyhow::Result;

/// How long the "copied" badge stays visible after a successful copy.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

/// Write-only clipboard boundary.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard via arboard. The handle is constructed per write; some
/// platforms invalidate long-lived clipboard connections.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        arboard::Clipboard::new()?.set_text(text)?;
        Ok(())
    }
}

/// A copyable text plus the feedback timer its control shows.
pub struct CopyAction {
    text: String,
    feedback_remaining: Duration,
}

impl CopyAction {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            feedback_remaining: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Copy the text. Success arms the feedback badge; failure only logs.
    pub fn press(&mut self, clipboard: &mut impl Clipboard) {
        match clipboard.set_text(&self.text) {
            Ok(()) => {
                self.feedback_remaining = COPY_FEEDBACK_DURATION;
            }
            Err(e) => {
                tracing::warn!("Failed to copy: {e}");
            }
        }
    }

    /// Advance the feedback timer; called from the frame tick.
    pub fn tick(&mut self, delta: Duration) {
        self.feedback_remaining = self.feedback_remaining.saturating_sub(delta);
    }

    /// Whether the "copied" badge should currently render.
    #[must_use]
    pub fn showing_feedback(&self) -> bool {
        !self.feedback_remaining.is_zero()
    }
}
