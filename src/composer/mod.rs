//! Message-composition boundary.
//!
//! The platform composer (native SMS/iMessage sheet, gateway API, whatever the
//! host has) sits behind [`MessageComposer`]. The core hands it one recipient
//! and one rendered body at a time and waits for the outcome before moving on.
//! Sent, cancelled, and failed all mean the same thing to the send pass: go to
//! the next contact.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::Mutex;

/// How a single composition ended.
///
/// The send pass does not branch on this; it exists so hosts and reports can
/// tell the cases apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComposeOutcome {
    /// The platform reports the message was handed off
    Sent,
    /// The user dismissed the compose flow
    Cancelled,
    /// The platform reported a send failure
    Failed,
}

impl Default for ComposeOutcome {
    fn default() -> Self {
        ComposeOutcome::Sent
    }
}

/// Transport-level composer errors.
///
/// Distinct from [`ComposeOutcome::Failed`]: an error means the composer could
/// not run at all (e.g. the device cannot send texts).
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("Device cannot send messages")]
    Unavailable,

    #[error("Composer error: {0}")]
    Other(String),
}

/// One message handed to the platform compose flow.
#[async_trait]
pub trait MessageComposer: Send + Sync {
    /// Compose and present one message; resolves when the flow finishes.
    async fn compose(&self, recipient: &str, body: &str) -> Result<ComposeOutcome, ComposeError>;
}

/// Composer that logs each message instead of sending it.
///
/// Used by the demo binary. An optional per-message delay stands in for the
/// user working through the platform compose sheet.
pub struct ConsoleComposer {
    delay: Option<Duration>,
}

impl ConsoleComposer {
    pub fn new() -> Self {
        Self { delay: None }
    }

    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay: (delay_ms > 0).then(|| Duration::from_millis(delay_ms)),
        }
    }
}

impl Default for ConsoleComposer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageComposer for ConsoleComposer {
    async fn compose(&self, recipient: &str, body: &str) -> Result<ComposeOutcome, ComposeError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        tracing::info!(recipient = %recipient, body = %body, "Composed message");
        Ok(ComposeOutcome::Sent)
    }
}

/// Test double that records every composed message.
#[derive(Default)]
pub struct RecordingComposer {
    sent: Mutex<Vec<(String, String)>>,
    outcome: ComposeOutcome,
}

impl RecordingComposer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            outcome: ComposeOutcome::Sent,
        }
    }

    /// Record messages but report this outcome for each.
    pub fn with_outcome(outcome: ComposeOutcome) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            outcome,
        }
    }

    /// `(recipient, body)` pairs in composition order.
    pub async fn messages(&self) -> Vec<(String, String)> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl MessageComposer for RecordingComposer {
    async fn compose(&self, recipient: &str, body: &str) -> Result<ComposeOutcome, ComposeError> {
        self.sent
            .lock()
            .await
            .push((recipient.to_string(), body.to_string()));
        Ok(self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_composer_captures_in_order() {
        tokio_test::block_on(async {
            let composer = RecordingComposer::new();
            composer.compose("+1 555 0100", "first").await.unwrap();
            composer.compose("+1 555 0101", "second").await.unwrap();

            let messages = composer.messages().await;
            assert_eq!(messages.len(), 2);
            assert_eq!(messages[0], ("+1 555 0100".to_string(), "first".to_string()));
            assert_eq!(messages[1].1, "second");
        });
    }

    #[test]
    fn test_console_composer_reports_sent() {
        tokio_test::block_on(async {
            let composer = ConsoleComposer::new();
            let outcome = composer.compose("+1 555 0100", "hi").await.unwrap();
            assert_eq!(outcome, ComposeOutcome::Sent);
        });
    }
}
