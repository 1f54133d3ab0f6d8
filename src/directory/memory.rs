//! In-memory contact directory.
//!
//! Seedable directory used by the demo binary and tests. Groups can be
//! inserted directly or loaded from a JSON fixture file.

use std::path::Path;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::contact::{ContactGroup, ContactRecord, GroupId};

use super::{ContactDirectory, DirectoryError, GroupSummary};

/// In-memory contact directory backed by a concurrent map.
///
/// Listing order follows insertion order, tracked separately since the map
/// itself is unordered.
#[derive(Default)]
pub struct MemoryDirectory {
    groups: DashMap<GroupId, ContactGroup>,
    order: std::sync::Mutex<Vec<GroupId>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a group.
    pub fn insert_group(&self, group: ContactGroup) {
        let id = group.id.clone();
        let mut order = self.order.lock().unwrap_or_else(|e| e.into_inner());
        if !order.contains(&id) {
            order.push(id.clone());
        }
        drop(order);
        self.groups.insert(id, group);
    }

    /// Load groups from a JSON fixture: an array of [`ContactGroup`] objects.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let raw = std::fs::read_to_string(path)?;
        let groups: Vec<ContactGroup> = serde_json::from_str(&raw)?;

        let directory = Self::new();
        for group in groups {
            directory.insert_group(group);
        }
        Ok(directory)
    }

    /// A small built-in directory for demos when no fixture is configured.
    pub fn with_sample_data() -> Self {
        let directory = Self::new();
        directory.insert_group(ContactGroup::new("jazz-workshop", "Jazz Workshop").with_contacts(
            vec![
                ContactRecord::new("Charles Mingus", "Charles", "Mingus")
                    .with_phone("+1 555 0100"),
                ContactRecord::new("Eric Dolphy", "Eric", "Dolphy"),
                ContactRecord::new("Dannie Richmond", "Dannie", "Richmond")
                    .with_phone("+1 555 0102"),
            ],
        ));
        directory
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

#[async_trait]
impl ContactDirectory for MemoryDirectory {
    async fn groups(&self) -> Result<Vec<GroupSummary>, DirectoryError> {
        let order = self.order.lock().unwrap_or_else(|e| e.into_inner()).clone();
        Ok(order
            .iter()
            .filter_map(|id| {
                self.groups.get(id).map(|g| GroupSummary {
                    id: g.id.clone(),
                    name: g.name.clone(),
                })
            })
            .collect())
    }

    async fn contacts_in_group(
        &self,
        group: &GroupId,
    ) -> Result<Vec<ContactRecord>, DirectoryError> {
        self.groups
            .get(group)
            .map(|g| g.contacts.clone())
            .ok_or_else(|| DirectoryError::GroupNotFound(group.clone()))
    }
}
