//! Draft storage with CRUD operations

use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use super::types::{DraftError, DraftResult, MessageDraft, UpdateDraftRequest};

/// In-memory draft storage
pub struct DraftStore {
    drafts: DashMap<Uuid, MessageDraft>,
}

impl Default for DraftStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftStore {
    /// Create a new draft store
    pub fn new() -> Self {
        Self {
            drafts: DashMap::new(),
        }
    }

    /// Create a new draft
    pub fn create(&self, draft: MessageDraft) -> DraftResult<MessageDraft> {
        draft.validate()?;

        if self.drafts.contains_key(&draft.id) {
            return Err(DraftError::AlreadyExists(draft.id));
        }

        let id = draft.id;
        self.drafts.insert(id, draft.clone());

        Ok(draft)
    }

    /// Get a draft by ID
    pub fn get(&self, id: Uuid) -> DraftResult<MessageDraft> {
        self.drafts
            .get(&id)
            .map(|d| d.clone())
            .ok_or(DraftError::NotFound(id))
    }

    /// List all drafts
    pub fn list(&self) -> Vec<MessageDraft> {
        self.drafts.iter().map(|entry| entry.value().clone()).collect()
    }

    /// Update an existing draft
    pub fn update(&self, id: Uuid, updates: UpdateDraftRequest) -> DraftResult<MessageDraft> {
        let mut draft = self.get(id)?;

        if let Some(text) = updates.text {
            draft.text = text;
        }

        if let Some(group_id) = updates.group_id {
            draft.group_id = group_id;
        }

        draft.updated_at = Utc::now();
        draft.validate()?;

        self.drafts.insert(id, draft.clone());

        Ok(draft)
    }

    /// Delete a draft by ID
    pub fn delete(&self, id: Uuid) -> DraftResult<()> {
        self.drafts
            .remove(&id)
            .map(|_| ())
            .ok_or(DraftError::NotFound(id))
    }

    /// Check if a draft exists
    pub fn exists(&self, id: Uuid) -> bool {
        self.drafts.contains_key(&id)
    }

    /// Get the number of drafts
    pub fn count(&self) -> usize {
        self.drafts.len()
    }
}

/// Create an Arc-wrapped draft store
pub fn create_draft_store() -> Arc<DraftStore> {
    Arc::new(DraftStore::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::GroupId;

    #[test]
    fn test_store_create_and_get() {
        let store = DraftStore::new();

        let draft = MessageDraft::new("Hey $name", Some(GroupId::from("band")));
        let id = draft.id;

        let created = store.create(draft).unwrap();
        assert_eq!(created.id, id);

        let retrieved = store.get(id).unwrap();
        assert_eq!(retrieved.text, "Hey $name");
        assert_eq!(retrieved.group_id, Some(GroupId::from("band")));
    }

    #[test]
    fn test_store_create_duplicate() {
        let store = DraftStore::new();

        let draft = MessageDraft::new("Hi", None);
        store.create(draft.clone()).unwrap();

        assert!(matches!(
            store.create(draft),
            Err(DraftError::AlreadyExists(_))
        ));
    }

    #[test]
    fn test_store_update() {
        let store = DraftStore::new();

        let draft = MessageDraft::new("Original", Some(GroupId::from("g1")));
        let id = draft.id;
        store.create(draft).unwrap();

        let updates = UpdateDraftRequest {
            text: Some("Updated $givenName".to_string()),
            group_id: Some(None),
        };

        let updated = store.update(id, updates).unwrap();
        assert_eq!(updated.text, "Updated $givenName");
        assert_eq!(updated.group_id, None);
        assert!(updated.updated_at >= updated.created_at);
    }

    #[test]
    fn test_store_delete() {
        let store = DraftStore::new();

        let draft = MessageDraft::new("Hi", None);
        let id = draft.id;
        store.create(draft).unwrap();
        assert!(store.exists(id));

        store.delete(id).unwrap();
        assert!(!store.exists(id));
        assert!(matches!(store.get(id), Err(DraftError::NotFound(_))));
    }

    #[test]
    fn test_store_list() {
        let store = DraftStore::new();

        for i in 0..3 {
            store.create(MessageDraft::new(format!("draft {}", i), None)).unwrap();
        }

        assert_eq!(store.list().len(), 3);
        assert_eq!(store.count(), 3);
    }

    #[test]
    fn test_empty_group_id_rejected() {
        let store = DraftStore::new();
        let draft = MessageDraft::new("Hi", Some(GroupId::from("")));
        assert!(matches!(
            store.create(draft),
            Err(DraftError::InvalidDraft(_))
        ));
    }
}
