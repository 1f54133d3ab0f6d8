//! Message template system.
//!
//! This module provides:
//! - Literal `$token` interpolation against a contact record
//! - The draft record (template text + selected group)
//! - In-memory draft storage with CRUD operations
//!
//! # Example
//!
//! ```
//! use templated_texts::contact::ContactRecord;
//! use templated_texts::template::interpolate;
//!
//! let contact = ContactRecord::new("Charles Mingus", "Charles", "Mingus");
//! let body = interpolate("Hey $name, this is $givenName $familyName", &contact);
//! assert_eq!(body, "Hey Charles Mingus, this is Charles Mingus");
//! ```

mod store;
mod substitution;
mod types;

pub use store::{create_draft_store, DraftStore};
pub use substitution::{interpolate, preview, Token, TOKENS};
pub use types::{DraftError, DraftResult, MessageDraft, UpdateDraftRequest};
