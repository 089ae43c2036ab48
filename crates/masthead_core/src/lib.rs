//! Core domain logic for Masthead: a small author/magazine/article mapping
//! layer over SQLite.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleError, ReferenceError};
pub use model::author::Author;
pub use model::magazine::Magazine;
pub use model::{ArticleId, AuthorId, MagazineId, ValidationError};
pub use repo::article_repo::{ArticleRepository, SqliteArticleRepository};
pub use repo::author_repo::{AuthorRepository, SqliteAuthorRepository};
pub use repo::magazine_repo::{
    MagazineRepository, SqliteMagazineRepository, CONTRIBUTING_AUTHOR_THRESHOLD,
};
pub use repo::{RepoError, RepoResult};
pub use service::author_service::AuthorService;
pub use service::magazine_service::MagazineService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
