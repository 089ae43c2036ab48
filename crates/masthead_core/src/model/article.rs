//! Article entity record.
//!
//! An article links exactly one author to exactly one magazine. The link is
//! kept as foreign-key identities rather than owned entity values, so an
//! `Article` can only be built from references that are already persisted.

use super::{required_text, ArticleId, AuthorId, MagazineId, ValidationError};
use crate::model::author::Author;
use crate::model::magazine::Magazine;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Article construction given a reference without a persisted identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceError {
    UnsavedAuthor,
    UnsavedMagazine,
}

impl Display for ReferenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsavedAuthor => {
                write!(f, "author must be saved (have an id) before it can be referenced")
            }
            Self::UnsavedMagazine => {
                write!(f, "magazine must be saved (have an id) before it can be referenced")
            }
        }
    }
}

impl Error for ReferenceError {}

/// Combined construction failure for [`Article::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleError {
    Validation(ValidationError),
    Reference(ReferenceError),
}

impl Display for ArticleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Reference(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ArticleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Reference(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ArticleError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<ReferenceError> for ArticleError {
    fn from(value: ReferenceError) -> Self {
        Self::Reference(value)
    }
}

/// A single article, owned by one author and published in one magazine.
///
/// `title` is immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    id: Option<ArticleId>,
    title: String,
    author_id: AuthorId,
    magazine_id: MagazineId,
}

impl Article {
    /// Creates an unsaved article linking a persisted author and magazine.
    ///
    /// Both references must already carry an identity; their ids are
    /// captured here, so an article value can never point at an unsaved
    /// entity and its own save cannot race that check.
    pub fn new(
        title: impl Into<String>,
        author: &Author,
        magazine: &Magazine,
    ) -> Result<Self, ArticleError> {
        let author_id = author.id().ok_or(ReferenceError::UnsavedAuthor)?;
        let magazine_id = magazine.id().ok_or(ReferenceError::UnsavedMagazine)?;
        Ok(Self {
            id: None,
            title: required_text(title, ValidationError::EmptyArticleTitle)?,
            author_id,
            magazine_id,
        })
    }

    /// Rehydrates an article from a persisted row, re-validating the title.
    pub fn with_id(
        id: ArticleId,
        title: impl Into<String>,
        author_id: AuthorId,
        magazine_id: MagazineId,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: Some(id),
            title: required_text(title, ValidationError::EmptyArticleTitle)?,
            author_id,
            magazine_id,
        })
    }

    pub fn id(&self) -> Option<ArticleId> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }

    pub fn magazine_id(&self) -> MagazineId {
        self.magazine_id
    }

    /// Records the backend-assigned identity after the first insert.
    pub(crate) fn assign_id(&mut self, id: ArticleId) {
        debug_assert!(self.id.is_none(), "identity is assigned exactly once");
        self.id = Some(id);
    }
}
