//! Contact data model.
//!
//! Read-only projections of directory contacts: a name in three forms plus an
//! ordered list of candidate phone numbers. Group membership order is supplied
//! by the directory and preserved everywhere downstream.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Opaque contact-group identifier assigned by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub String);

impl GroupId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for GroupId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A directory contact reduced to what the send flow needs.
///
/// Any field may be empty; an empty name substitutes as an empty string and an
/// all-empty phone list makes the record ineligible for sending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Full display form of the name (e.g. "Charles Mingus").
    pub full_name: String,
    /// Given (first) name.
    pub given_name: String,
    /// Family (last) name.
    pub family_name: String,
    /// Candidate destination numbers, in directory order.
    #[serde(default)]
    pub phone_numbers: SmallVec<[String; 2]>,
}

impl ContactRecord {
    pub fn new(
        full_name: impl Into<String>,
        given_name: impl Into<String>,
        family_name: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            given_name: given_name.into(),
            family_name: family_name.into(),
            phone_numbers: SmallVec::new(),
        }
    }

    /// Add a candidate phone number, keeping directory order.
    pub fn with_phone(mut self, number: impl Into<String>) -> Self {
        self.phone_numbers.push(number.into());
        self
    }

    /// Whether this contact can receive a message at all.
    pub fn has_destination(&self) -> bool {
        self.phone_numbers.iter().any(|n| !n.is_empty())
    }

    /// First non-empty phone number, the one a message is addressed to.
    pub fn destination(&self) -> Option<&str> {
        self.phone_numbers
            .iter()
            .find(|n| !n.is_empty())
            .map(String::as_str)
    }

    /// Stand-in contact used for template previews when no group is bound.
    pub fn sample() -> Self {
        Self::new("Charles Mingus", "Charles", "Mingus")
    }
}

/// An ordered set of contacts under a directory group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactGroup {
    pub id: GroupId,
    pub name: String,
    /// Members in directory order; never reordered by this crate.
    pub contacts: Vec<ContactRecord>,
}

impl ContactGroup {
    pub fn new(id: impl Into<GroupId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contacts: Vec::new(),
        }
    }

    pub fn with_contacts(mut self, contacts: Vec<ContactRecord>) -> Self {
        self.contacts = contacts;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_skips_empty_entries() {
        let contact = ContactRecord::new("A B", "A", "B")
            .with_phone("")
            .with_phone("+1 555 0100");

        assert!(contact.has_destination());
        assert_eq!(contact.destination(), Some("+1 555 0100"));
    }

    #[test]
    fn test_all_empty_numbers_is_ineligible() {
        let contact = ContactRecord::new("A B", "A", "B").with_phone("").with_phone("");
        assert!(!contact.has_destination());
        assert_eq!(contact.destination(), None);
    }

    #[test]
    fn test_no_numbers_is_ineligible() {
        let contact = ContactRecord::new("A B", "A", "B");
        assert!(!contact.has_destination());
    }

    #[test]
    fn test_contact_deserializes_without_numbers() {
        let contact: ContactRecord = serde_json::from_str(
            r#"{"full_name":"A B","given_name":"A","family_name":"B"}"#,
        )
        .unwrap();
        assert!(contact.phone_numbers.is_empty());
    }
}
