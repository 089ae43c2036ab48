//! Magazine use-case service.
//!
//! # Responsibility
//! - Expose magazine-scoped operations: CRUD, contributor/title views,
//!   the contributing-author threshold query and the system-wide
//!   top-publisher aggregate.
//!
//! # Invariants
//! - All aggregate reads are single-query, read-only and stateless.
//! - Aggregate operations require a persisted magazine.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::magazine::Magazine;
use crate::model::MagazineId;
use crate::repo::magazine_repo::MagazineRepository;
use crate::repo::{RepoError, RepoResult};

/// Use-case service for magazine operations.
pub struct MagazineService<R: MagazineRepository> {
    magazines: R,
}

impl<R: MagazineRepository> MagazineService<R> {
    pub fn new(magazines: R) -> Self {
        Self { magazines }
    }

    /// Inserts or updates the magazine, returning its identity.
    pub fn save(&self, magazine: &mut Magazine) -> RepoResult<MagazineId> {
        self.magazines.save(magazine)
    }

    /// Fetches one magazine by identity; absence is `Ok(None)`.
    pub fn find_by_id(&self, id: MagazineId) -> RepoResult<Option<Magazine>> {
        self.magazines.find_by_id(id)
    }

    /// All articles published in this magazine, in backend order.
    pub fn articles(&self, magazine: &Magazine) -> RepoResult<Vec<Article>> {
        let magazine_id = persisted(magazine)?;
        self.magazines.articles_in_magazine(magazine_id)
    }

    /// Distinct authors (by identity) with at least one article here.
    pub fn contributors(&self, magazine: &Magazine) -> RepoResult<Vec<Author>> {
        let magazine_id = persisted(magazine)?;
        self.magazines.contributors(magazine_id)
    }

    /// Titles of this magazine's articles, without full hydration.
    pub fn article_titles(&self, magazine: &Magazine) -> RepoResult<Vec<String>> {
        let magazine_id = persisted(magazine)?;
        self.magazines.article_titles(magazine_id)
    }

    /// Authors with strictly more than 2 articles in this magazine.
    pub fn contributing_authors(&self, magazine: &Magazine) -> RepoResult<Vec<Author>> {
        let magazine_id = persisted(magazine)?;
        self.magazines.contributing_authors(magazine_id)
    }

    /// The magazine with the most articles across the whole system, or
    /// `None` when no articles exist. Not scoped to any instance; ties
    /// between equal counts follow backend row order.
    pub fn top_publisher(&self) -> RepoResult<Option<Magazine>> {
        self.magazines.top_publisher()
    }
}

fn persisted(magazine: &Magazine) -> RepoResult<MagazineId> {
    magazine.id().ok_or(RepoError::UnsavedEntity("magazine"))
}
