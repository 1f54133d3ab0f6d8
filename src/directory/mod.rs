//! Contact-group provider boundary.
//!
//! The directory is the one place contacts come from. Hosts hand the core an
//! implementation of [`ContactDirectory`]; the core only ever asks for the
//! group list and the ordered members of one group. Directory failures are
//! soft: callers that do not care map them to an empty contact list via
//! [`contacts_or_empty`] and let the sequencer exhaust normally.

mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contact::{ContactRecord, GroupId};

pub use memory::MemoryDirectory;

/// Errors that can occur while talking to a contact directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The requested group does not exist
    #[error("Group not found: {0}")]
    GroupNotFound(GroupId),

    /// The host lacks permission to read contacts
    #[error("Contacts access denied")]
    AccessDenied,

    /// Fixture or backing store could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Fixture contents were not valid
    #[error("Malformed directory data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A group as listed by the directory, without its members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub id: GroupId,
    pub name: String,
}

/// Read-only view of the platform contact directory.
#[async_trait]
pub trait ContactDirectory: Send + Sync {
    /// List all groups, in directory order.
    async fn groups(&self) -> Result<Vec<GroupSummary>, DirectoryError>;

    /// Ordered members of one group.
    ///
    /// Order is whatever the directory reports; the core preserves it.
    async fn contacts_in_group(&self, group: &GroupId)
        -> Result<Vec<ContactRecord>, DirectoryError>;
}

/// Resolve a group's members, treating any failure as an empty group.
pub async fn contacts_or_empty(
    directory: &dyn ContactDirectory,
    group: &GroupId,
) -> Vec<ContactRecord> {
    match directory.contacts_in_group(group).await {
        Ok(contacts) => contacts,
        Err(e) => {
            tracing::warn!(group = %group, error = %e, "Directory lookup failed, treating group as empty");
            Vec::new()
        }
    }
}
