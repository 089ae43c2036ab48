//! Article repository contract and SQLite implementation.
//!
//! Articles carry their author/magazine links as foreign-key identities
//! captured at construction, so the save path only has to trust the
//! backend's reference constraints; a dangling id surfaces as
//! [`RepoError::Constraint`](super::RepoError::Constraint).

use super::{article_from_row, RepoError, RepoResult};
use crate::model::article::Article;
use crate::model::ArticleId;
use rusqlite::{params, Connection};

/// Repository interface for article persistence.
pub trait ArticleRepository {
    /// Inserts when the article has no identity, updates otherwise.
    fn save(&self, article: &mut Article) -> RepoResult<ArticleId>;

    /// Fetches one article; absence is `Ok(None)`, never an error.
    fn find_by_id(&self, id: ArticleId) -> RepoResult<Option<Article>>;
}

/// SQLite-backed article repository over a borrowed connection.
pub struct SqliteArticleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteArticleRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ArticleRepository for SqliteArticleRepository<'_> {
    fn save(&self, article: &mut Article) -> RepoResult<ArticleId> {
        if let Some(id) = article.id() {
            let changed = self.conn.execute(
                "UPDATE articles SET title = ?1, author_id = ?2, magazine_id = ?3 WHERE id = ?4;",
                params![
                    article.title(),
                    article.author_id(),
                    article.magazine_id(),
                    id
                ],
            )?;
            if changed == 0 {
                return Err(RepoError::NotFound {
                    entity: "article",
                    id,
                });
            }
            return Ok(id);
        }

        self.conn.execute(
            "INSERT INTO articles (title, author_id, magazine_id) VALUES (?1, ?2, ?3);",
            params![article.title(), article.author_id(), article.magazine_id()],
        )?;
        let id = self.conn.last_insert_rowid();
        article.assign_id(id);
        Ok(id)
    }

    fn find_by_id(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, author_id, magazine_id FROM articles WHERE id = ?1;",
        )?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(article_from_row(row)?));
        }
        Ok(None)
    }
}
