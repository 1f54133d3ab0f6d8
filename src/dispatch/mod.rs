//! Send pass orchestration.
//!
//! A [`SendPass`] drives one full walk over a group: advance the sequencer,
//! interpolate the draft text for that contact, hand the rendered body to the
//! composer, wait for the outcome, repeat until exhaustion. Compositions never
//! overlap; the whole pass is sequential by design, matching how a person
//! steps through a native compose sheet one recipient at a time.

use std::sync::Arc;

use serde::Serialize;

use crate::composer::{ComposeOutcome, MessageComposer};
use crate::contact::ContactRecord;
use crate::directory::ContactDirectory;
use crate::error::Result;
use crate::sequencer::SendSequencer;
use crate::template::{interpolate, MessageDraft};

/// Counters for one completed send pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SendPassReport {
    /// Messages the composer reported as sent
    pub sent: usize,
    /// Compose flows the user dismissed
    pub cancelled: usize,
    /// Compose flows the platform reported as failed
    pub failed: usize,
    /// Compositions that could not run at all
    pub errors: usize,
    /// Contacts skipped for lack of a destination address
    pub skipped: usize,
    /// Total contacts in the group snapshot
    pub total: usize,
}

impl SendPassReport {
    /// Contacts actually offered to the composer.
    pub fn attempted(&self) -> usize {
        self.sent + self.cancelled + self.failed + self.errors
    }
}

/// One sequential send pass over a bound contact group.
pub struct SendPass {
    sequencer: SendSequencer,
    template: String,
    composer: Arc<dyn MessageComposer>,
}

impl SendPass {
    /// Create a pass over a contact snapshot with the given draft text.
    pub fn new(
        template: impl Into<String>,
        contacts: Vec<ContactRecord>,
        composer: Arc<dyn MessageComposer>,
    ) -> Self {
        Self {
            sequencer: SendSequencer::bound(contacts),
            template: template.into(),
            composer,
        }
    }

    /// Rebind to a different group snapshot, discarding any scan position.
    pub fn reset(&mut self, contacts: Vec<ContactRecord>) {
        self.sequencer.reset(contacts);
    }

    /// The contact currently being composed to, if any.
    pub fn current(&self) -> Option<&ContactRecord> {
        self.sequencer.current()
    }

    /// Compose to the next eligible contact.
    ///
    /// Returns the outcome for that contact, or `None` once the group is
    /// exhausted. A composer error still moves the pass forward; the next
    /// call picks up at the following contact.
    pub async fn step(&mut self) -> Option<ComposeOutcome> {
        let contact = self.sequencer.advance()?.clone();
        // advance() only yields eligible records, so a destination exists
        let recipient = contact.destination().unwrap_or_default().to_string();
        let body = interpolate(&self.template, &contact);

        match self.composer.compose(&recipient, &body).await {
            Ok(outcome) => {
                tracing::debug!(
                    recipient = %recipient,
                    outcome = ?outcome,
                    "Compose flow finished"
                );
                Some(outcome)
            }
            Err(e) => {
                tracing::warn!(recipient = %recipient, error = %e, "Composer error, moving on");
                Some(ComposeOutcome::Failed)
            }
        }
    }

    /// Run the pass to exhaustion and report what happened.
    #[tracing::instrument(name = "dispatch.run", skip(self), fields(total = self.sequencer.len()))]
    pub async fn run(&mut self) -> SendPassReport {
        let total = self.sequencer.len();
        let eligible = self.sequencer.eligible_count();
        let mut report = SendPassReport {
            total,
            skipped: total - eligible,
            ..Default::default()
        };

        while let Some(contact) = self.sequencer.advance() {
            let contact = contact.clone();
            let recipient = contact.destination().unwrap_or_default().to_string();
            let body = interpolate(&self.template, &contact);

            match self.composer.compose(&recipient, &body).await {
                Ok(ComposeOutcome::Sent) => report.sent += 1,
                Ok(ComposeOutcome::Cancelled) => report.cancelled += 1,
                Ok(ComposeOutcome::Failed) => report.failed += 1,
                Err(e) => {
                    tracing::warn!(recipient = %recipient, error = %e, "Composer error, moving on");
                    report.errors += 1;
                }
            }
        }

        tracing::info!(
            sent = report.sent,
            skipped = report.skipped,
            total = report.total,
            "Send pass complete"
        );
        report
    }
}

/// Build a pass for a saved draft, resolving its group through the directory.
///
/// Group resolution failures surface here, unlike
/// [`contacts_or_empty`](crate::directory::contacts_or_empty); use this when
/// the host wants to distinguish a missing group from an empty one. A draft
/// with no group bound gets an empty pass.
pub async fn pass_for_draft(
    draft: &MessageDraft,
    directory: &dyn ContactDirectory,
    composer: Arc<dyn MessageComposer>,
) -> Result<SendPass> {
    let contacts = match &draft.group_id {
        Some(group_id) => directory.contacts_in_group(group_id).await?,
        None => Vec::new(),
    };
    Ok(SendPass::new(draft.text.clone(), contacts, composer))
}
