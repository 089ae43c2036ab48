//! Author entity record.

use super::{required_text, AuthorId, ValidationError};
use serde::Serialize;

/// A writer who contributes articles to magazines.
///
/// `name` is validated at construction and read-only afterwards. Identity
/// is `None` until the record is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    id: Option<AuthorId>,
    name: String,
}

impl Author {
    /// Creates an unsaved author with a validated, trimmed name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: None,
            name: required_text(name, ValidationError::EmptyAuthorName)?,
        })
    }

    /// Rehydrates an author from a persisted row.
    ///
    /// Re-validates the name so invalid persisted state is rejected at the
    /// boundary instead of leaking into the domain.
    pub fn with_id(id: AuthorId, name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: Some(id),
            name: required_text(name, ValidationError::EmptyAuthorName)?,
        })
    }

    pub fn id(&self) -> Option<AuthorId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records the backend-assigned identity after the first insert.
    pub(crate) fn assign_id(&mut self, id: AuthorId) {
        debug_assert!(self.id.is_none(), "identity is assigned exactly once");
        self.id = Some(id);
    }
}
