//! Domain model for the author/magazine/article graph.
//!
//! # Responsibility
//! - Define the three entity records mapped to storage rows.
//! - Enforce field validation at construction and mutation time.
//!
//! # Invariants
//! - Textual fields are non-empty after trimming, always stored trimmed.
//! - Identity is assigned once by the storage backend and never changes;
//!   an entity with `id() == None` has not been persisted.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod article;
pub mod author;
pub mod magazine;

/// Backend-assigned row identity for authors.
pub type AuthorId = i64;
/// Backend-assigned row identity for magazines.
pub type MagazineId = i64;
/// Backend-assigned row identity for articles.
pub type ArticleId = i64;

/// Construction/mutation-time failure for a required text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyAuthorName,
    EmptyMagazineName,
    EmptyMagazineCategory,
    EmptyArticleTitle,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAuthorName => write!(f, "author name must not be empty"),
            Self::EmptyMagazineName => write!(f, "magazine name must not be empty"),
            Self::EmptyMagazineCategory => write!(f, "magazine category must not be empty"),
            Self::EmptyArticleTitle => write!(f, "article title must not be empty"),
        }
    }
}

impl Error for ValidationError {}

/// Trims and validates a required text field.
fn required_text(
    value: impl Into<String>,
    on_empty: ValidationError,
) -> Result<String, ValidationError> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(on_empty);
    }
    Ok(trimmed.to_string())
}
