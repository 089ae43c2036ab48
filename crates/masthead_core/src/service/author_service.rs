//! Author use-case service.
//!
//! # Responsibility
//! - Expose author-scoped operations: CRUD, relationship reads and the
//!   `add_article` write path.
//!
//! # Invariants
//! - Aggregate operations require a persisted author; an unsaved record
//!   is an explicit [`RepoError::UnsavedEntity`], not an empty result.
//! - `add_article` is validate-construct-save with no transaction around
//!   the steps. Known gap: author and magazine identity is checked against
//!   the in-memory records, not re-verified against the backend; the
//!   foreign-key constraints are the final arbiter at insert time.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::magazine::Magazine;
use crate::model::AuthorId;
use crate::repo::article_repo::ArticleRepository;
use crate::repo::author_repo::AuthorRepository;
use crate::repo::{RepoError, RepoResult};
use log::info;

/// Use-case service for author operations.
pub struct AuthorService<R: AuthorRepository, A: ArticleRepository> {
    authors: R,
    articles: A,
}

impl<R: AuthorRepository, A: ArticleRepository> AuthorService<R, A> {
    /// Creates a service over author and article repositories; the article
    /// repository backs the `add_article` write path.
    pub fn new(authors: R, articles: A) -> Self {
        Self { authors, articles }
    }

    /// Inserts or updates the author, returning its identity.
    pub fn save(&self, author: &mut Author) -> RepoResult<AuthorId> {
        self.authors.save(author)
    }

    /// Fetches one author by identity; absence is `Ok(None)`.
    pub fn find_by_id(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        self.authors.find_by_id(id)
    }

    /// All articles written by this author, in backend order.
    pub fn articles(&self, author: &Author) -> RepoResult<Vec<Article>> {
        let author_id = persisted(author)?;
        self.authors.articles_by_author(author_id)
    }

    /// Distinct magazines (by identity) this author has published in.
    pub fn magazines(&self, author: &Author) -> RepoResult<Vec<Magazine>> {
        let author_id = persisted(author)?;
        self.authors.magazines_of_author(author_id)
    }

    /// Creates and immediately persists a new article linking this author
    /// and the given magazine. The sole normal-use write path for articles.
    pub fn add_article(
        &self,
        author: &Author,
        magazine: &Magazine,
        title: impl Into<String>,
    ) -> RepoResult<Article> {
        let author_id = persisted(author)?;
        let mut article = Article::new(title, author, magazine)?;
        let article_id = self.articles.save(&mut article)?;
        info!(
            "event=add_article module=service status=ok article_id={} author_id={} magazine_id={}",
            article_id,
            author_id,
            article.magazine_id()
        );
        Ok(article)
    }

    /// Distinct category values across this author's magazines, in
    /// first-occurrence order (insertion-order dedup, not sorted).
    pub fn topic_areas(&self, author: &Author) -> RepoResult<Vec<String>> {
        let magazines = self.magazines(author)?;
        let mut categories: Vec<String> = Vec::new();
        for magazine in magazines {
            if !categories.iter().any(|c| c == magazine.category()) {
                categories.push(magazine.category().to_string());
            }
        }
        Ok(categories)
    }
}

fn persisted(author: &Author) -> RepoResult<AuthorId> {
    author.id().ok_or(RepoError::UnsavedEntity("author"))
}
