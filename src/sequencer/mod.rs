//! Forward-only send iteration over a contact group.
//!
//! The sequencer walks a fixed snapshot of a group's contacts, yielding one
//! eligible record at a time. A record is eligible when it has at least one
//! non-empty phone number; everything else is skipped silently. Reaching the
//! end of the list parks the sequencer back in `Idle`, and a further
//! `advance()` starts a fresh pass from the top, so the same group can be
//! walked any number of times.

use crate::contact::ContactRecord;

/// Scan position over the bound contact snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    /// Fresh bind or post-exhaustion; the next advance scans from index 0.
    Idle,
    /// Holding an eligible record at this index.
    Active(usize),
}

/// Sequential per-contact send iterator.
///
/// State is recreated by [`reset`](Self::reset) whenever the host switches
/// groups; a position never carries over from a previous group. All methods
/// are infallible: an empty or fully-ineligible group simply yields `None`.
#[derive(Debug)]
pub struct SendSequencer {
    contacts: Vec<ContactRecord>,
    position: Position,
}

impl Default for SendSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl SendSequencer {
    /// Create a sequencer bound to an empty group.
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
            position: Position::Idle,
        }
    }

    /// Create a sequencer already bound to a contact snapshot.
    pub fn bound(contacts: Vec<ContactRecord>) -> Self {
        Self {
            contacts,
            position: Position::Idle,
        }
    }

    /// Rebind to a new ordered contact snapshot and forget any position.
    ///
    /// Must be called whenever the selected group changes, mid-scan or not.
    pub fn reset(&mut self, contacts: Vec<ContactRecord>) {
        self.contacts = contacts;
        self.position = Position::Idle;
    }

    /// Yield the next eligible contact, or `None` when the pass is done.
    ///
    /// Scans forward from just past the current position (from the start when
    /// idle) and stops at the first record with a usable destination. Records
    /// whose numbers are all empty are passed over without side effects. When
    /// the scan falls off the end the sequencer returns to idle, so a
    /// subsequent call restarts from the top of the same snapshot.
    pub fn advance(&mut self) -> Option<&ContactRecord> {
        let start = match self.position {
            Position::Idle => 0,
            Position::Active(i) => i + 1,
        };

        for (offset, contact) in self.contacts[start.min(self.contacts.len())..].iter().enumerate() {
            if !contact.has_destination() {
                continue;
            }
            let index = start + offset;
            self.position = Position::Active(index);
            return Some(&self.contacts[index]);
        }

        self.position = Position::Idle;
        None
    }

    /// The contact at the current position, without advancing.
    pub fn current(&self) -> Option<&ContactRecord> {
        match self.position {
            Position::Idle => None,
            Position::Active(i) => self.contacts.get(i),
        }
    }

    /// Whether the sequencer is idle (fresh bind or exhausted pass).
    pub fn is_idle(&self) -> bool {
        self.position == Position::Idle
    }

    /// Number of contacts in the bound snapshot, eligible or not.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// How many contacts in the snapshot could receive a message.
    pub fn eligible_count(&self) -> usize {
        self.contacts.iter().filter(|c| c.has_destination()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_phone(name: &str, number: &str) -> ContactRecord {
        ContactRecord::new(name, name, "").with_phone(number)
    }

    fn without_phone(name: &str) -> ContactRecord {
        ContactRecord::new(name, name, "")
    }

    #[test]
    fn test_empty_group_yields_none() {
        let mut seq = SendSequencer::new();
        seq.reset(Vec::new());
        assert!(seq.advance().is_none());
        assert!(seq.current().is_none());
    }

    #[test]
    fn test_skips_contacts_without_numbers() {
        let mut seq = SendSequencer::bound(vec![
            without_phone("r1"),
            with_phone("r2", "+1 555 0100"),
            with_phone("r3", "+1 555 0101"),
        ]);

        assert_eq!(seq.advance().unwrap().full_name, "r2");
        assert_eq!(seq.advance().unwrap().full_name, "r3");
        assert!(seq.advance().is_none());
        assert_eq!(seq.advance().unwrap().full_name, "r2");
    }

    #[test]
    fn test_advance_restarts_after_exhaustion() {
        let mut seq = SendSequencer::bound(vec![
            without_phone("r1"),
            with_phone("r2", "+1 555 0100"),
        ]);

        assert_eq!(seq.advance().unwrap().full_name, "r2");
        assert!(seq.advance().is_none());
        // Exhaustion is not sticky: the next advance rescans from the top.
        assert_eq!(seq.advance().unwrap().full_name, "r2");
    }

    #[test]
    fn test_current_does_not_advance() {
        let mut seq = SendSequencer::bound(vec![with_phone("r1", "+1 555 0100")]);

        assert!(seq.current().is_none());
        seq.advance();
        assert_eq!(seq.current().unwrap().full_name, "r1");
        assert_eq!(seq.current().unwrap().full_name, "r1");
        assert!(seq.advance().is_none());
        assert!(seq.current().is_none());
    }

    #[test]
    fn test_reset_discards_mid_scan_position() {
        let mut seq = SendSequencer::bound(vec![
            with_phone("a1", "+1 555 0100"),
            with_phone("a2", "+1 555 0101"),
        ]);
        seq.advance();
        assert!(!seq.is_idle());

        seq.reset(vec![with_phone("b1", "+1 555 0200")]);
        assert!(seq.is_idle());
        assert!(seq.current().is_none());
        assert_eq!(seq.advance().unwrap().full_name, "b1");
    }

    #[test]
    fn test_all_ineligible_group_yields_none() {
        let mut seq = SendSequencer::bound(vec![without_phone("r1"), without_phone("r2")]);
        assert!(seq.advance().is_none());
        assert!(seq.is_idle());
    }

    #[test]
    fn test_blank_number_is_not_a_destination() {
        let mut seq = SendSequencer::bound(vec![
            ContactRecord::new("r1", "r1", "").with_phone(""),
            with_phone("r2", "+1 555 0100"),
        ]);
        assert_eq!(seq.advance().unwrap().full_name, "r2");
    }

    #[test]
    fn test_full_pass_is_eligible_subsequence_in_order() {
        let contacts = vec![
            without_phone("c0"),
            with_phone("c1", "+1 555 0101"),
            with_phone("c2", "+1 555 0102"),
            without_phone("c3"),
            with_phone("c4", "+1 555 0104"),
        ];
        let expected: Vec<String> = contacts
            .iter()
            .filter(|c| c.has_destination())
            .map(|c| c.full_name.clone())
            .collect();

        let mut seq = SendSequencer::bound(contacts);
        let mut yielded = Vec::new();
        while let Some(contact) = seq.advance() {
            yielded.push(contact.full_name.clone());
        }

        assert_eq!(yielded, expected);
        assert_eq!(seq.eligible_count(), expected.len());
    }
}
