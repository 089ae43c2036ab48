//! Magazine entity record.

use super::{required_text, MagazineId, ValidationError};
use serde::Serialize;

/// A publication that aggregates articles and their authors.
///
/// `name` and `category` stay mutable after construction, but only through
/// validating setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Magazine {
    id: Option<MagazineId>,
    name: String,
    category: String,
}

impl Magazine {
    /// Creates an unsaved magazine with validated, trimmed fields.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: None,
            name: required_text(name, ValidationError::EmptyMagazineName)?,
            category: required_text(category, ValidationError::EmptyMagazineCategory)?,
        })
    }

    /// Rehydrates a magazine from a persisted row, re-validating fields.
    pub fn with_id(
        id: MagazineId,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: Some(id),
            name: required_text(name, ValidationError::EmptyMagazineName)?,
            category: required_text(category, ValidationError::EmptyMagazineCategory)?,
        })
    }

    pub fn id(&self) -> Option<MagazineId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Renames the magazine; rejects blank input.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.name = required_text(name, ValidationError::EmptyMagazineName)?;
        Ok(())
    }

    /// Changes the magazine category; rejects blank input.
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<(), ValidationError> {
        self.category = required_text(category, ValidationError::EmptyMagazineCategory)?;
        Ok(())
    }

    /// Records the backend-assigned identity after the first insert.
    pub(crate) fn assign_id(&mut self, id: MagazineId) {
        debug_assert!(self.id.is_none(), "identity is assigned exactly once");
        self.id = Some(id);
    }
}
