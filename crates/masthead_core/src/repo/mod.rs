//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts per entity.
//! - Isolate SQLite query details from service/business orchestration.
//! - Decode result rows into validated entity records.
//!
//! # Invariants
//! - Entities are validated at construction, so write paths never see
//!   blank text; read paths reject invalid persisted state via
//!   [`RepoError::InvalidData`] instead of masking it.
//! - Two row shapes are supported per entity: name-keyed for single-row
//!   lookups, positional in declared column order with `id` first for
//!   relationship and aggregate result sets.
//! - Every operation is one auto-committed statement; nothing here opens
//!   a multi-statement transaction.

use crate::db::DbError;
use crate::model::article::{Article, ArticleError, ReferenceError};
use crate::model::author::Author;
use crate::model::magazine::Magazine;
use crate::model::ValidationError;
use rusqlite::Row;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod article_repo;
pub mod author_repo;
pub mod magazine_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for entity persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// A required text field was blank at construction or setter time.
    Validation(ValidationError),
    /// An article was given an unpersisted author or magazine reference.
    Reference(ReferenceError),
    /// The backend rejected a write over a foreign-key or not-null rule.
    Constraint(String),
    /// An update targeted an identity the backend no longer knows.
    NotFound { entity: &'static str, id: i64 },
    /// An aggregate operation was invoked on an entity without identity.
    UnsavedEntity(&'static str),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Reference(err) => write!(f, "{err}"),
            Self::Constraint(message) => write!(f, "constraint violated: {message}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::UnsavedEntity(entity) => {
                write!(f, "{entity} must be saved before this operation")
            }
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Reference(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Constraint(_)
            | Self::NotFound { .. }
            | Self::UnsavedEntity(_)
            | Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<ReferenceError> for RepoError {
    fn from(value: ReferenceError) -> Self {
        Self::Reference(value)
    }
}

impl From<ArticleError> for RepoError {
    fn from(value: ArticleError) -> Self {
        match value {
            ArticleError::Validation(err) => Self::Validation(err),
            ArticleError::Reference(err) => Self::Reference(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        match &value {
            rusqlite::Error::SqliteFailure(failure, message)
                if failure.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Self::Constraint(
                    message
                        .clone()
                        .unwrap_or_else(|| "constraint violation".to_string()),
                )
            }
            _ => Self::Db(DbError::Sqlite(value)),
        }
    }
}

// Row decoders, shared between repositories because join queries hydrate
// entities owned by another repository (e.g. an author's magazines).
// Single-row lookups decode by column name; relationship and aggregate
// reads decode positionally.

pub(crate) fn author_from_row(row: &Row<'_>) -> RepoResult<Author> {
    let id: i64 = row.get("id")?;
    let name: String = row.get("name")?;
    Author::with_id(id, name).map_err(|err| invalid_row("authors", id, err))
}

/// Decodes `(id, name)` in declared column order.
pub(crate) fn author_from_positional(row: &Row<'_>) -> RepoResult<Author> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    Author::with_id(id, name).map_err(|err| invalid_row("authors", id, err))
}

pub(crate) fn magazine_from_row(row: &Row<'_>) -> RepoResult<Magazine> {
    let id: i64 = row.get("id")?;
    let name: String = row.get("name")?;
    let category: String = row.get("category")?;
    Magazine::with_id(id, name, category).map_err(|err| invalid_row("magazines", id, err))
}

/// Decodes `(id, name, category)` in declared column order.
pub(crate) fn magazine_from_positional(row: &Row<'_>) -> RepoResult<Magazine> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let category: String = row.get(2)?;
    Magazine::with_id(id, name, category).map_err(|err| invalid_row("magazines", id, err))
}

pub(crate) fn article_from_row(row: &Row<'_>) -> RepoResult<Article> {
    let id: i64 = row.get("id")?;
    let title: String = row.get("title")?;
    let author_id: i64 = row.get("author_id")?;
    let magazine_id: i64 = row.get("magazine_id")?;
    Article::with_id(id, title, author_id, magazine_id)
        .map_err(|err| invalid_row("articles", id, err))
}

/// Decodes `(id, title, author_id, magazine_id)` in declared column order.
pub(crate) fn article_from_positional(row: &Row<'_>) -> RepoResult<Article> {
    let id: i64 = row.get(0)?;
    let title: String = row.get(1)?;
    let author_id: i64 = row.get(2)?;
    let magazine_id: i64 = row.get(3)?;
    Article::with_id(id, title, author_id, magazine_id)
        .map_err(|err| invalid_row("articles", id, err))
}

fn invalid_row(table: &'static str, id: i64, err: ValidationError) -> RepoError {
    RepoError::InvalidData(format!("{table} row {id}: {err}"))
}
