//! Draft types and error definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::contact::GroupId;

/// Draft-specific error type
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("Draft not found: {0}")]
    NotFound(Uuid),

    #[error("Draft already exists: {0}")]
    AlreadyExists(Uuid),

    #[error("Invalid draft: {0}")]
    InvalidDraft(String),
}

/// Result type for draft operations
pub type DraftResult<T> = Result<T, DraftError>;

/// A saved message draft: the template text plus the selected group.
///
/// This is the one record the host persists between sessions. The storage
/// format is the host's concern; this crate only defines the shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDraft {
    /// Unique draft identifier
    pub id: Uuid,

    /// Template text with `$token` placeholders
    pub text: String,

    /// Selected contact group, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,

    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl MessageDraft {
    pub fn new(text: impl Into<String>, group_id: Option<GroupId>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            group_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate the draft
    pub fn validate(&self) -> DraftResult<()> {
        // SMS-class messages; anything longer is a host bug
        if self.text.len() > 4096 {
            return Err(DraftError::InvalidDraft(
                "Text must be at most 4096 bytes".to_string(),
            ));
        }

        if let Some(group_id) = &self.group_id {
            if group_id.as_str().is_empty() {
                return Err(DraftError::InvalidDraft(
                    "Group ID must not be empty when set".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Request to update an existing draft
#[derive(Debug, Deserialize)]
pub struct UpdateDraftRequest {
    /// Template text (optional)
    pub text: Option<String>,

    /// Selected group (optional, use null to clear)
    pub group_id: Option<Option<GroupId>>,
}
