//! Author repository contract and SQLite implementation.
//!
//! Besides plain CRUD this repository owns the author-scoped relationship
//! queries: the author's articles, and the distinct magazines reachable
//! through them.

use super::{
    article_from_positional, author_from_row, magazine_from_positional, RepoError, RepoResult,
};
use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::magazine::Magazine;
use crate::model::AuthorId;
use rusqlite::{params, Connection};

const AUTHOR_SELECT_SQL: &str = "SELECT id, name FROM authors";

/// Repository interface for author persistence and relationships.
pub trait AuthorRepository {
    /// Inserts when the author has no identity, updates otherwise.
    ///
    /// On insert the backend-assigned identity is written back into the
    /// record and returned.
    fn save(&self, author: &mut Author) -> RepoResult<AuthorId>;

    /// Fetches one author; absence is `Ok(None)`, never an error.
    fn find_by_id(&self, id: AuthorId) -> RepoResult<Option<Author>>;

    /// All articles written by this author, in backend order.
    fn articles_by_author(&self, author_id: AuthorId) -> RepoResult<Vec<Article>>;

    /// Distinct magazines (by identity) the author has published in.
    fn magazines_of_author(&self, author_id: AuthorId) -> RepoResult<Vec<Magazine>>;
}

/// SQLite-backed author repository over a borrowed connection.
pub struct SqliteAuthorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAuthorRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AuthorRepository for SqliteAuthorRepository<'_> {
    fn save(&self, author: &mut Author) -> RepoResult<AuthorId> {
        if let Some(id) = author.id() {
            let changed = self.conn.execute(
                "UPDATE authors SET name = ?1 WHERE id = ?2;",
                params![author.name(), id],
            )?;
            if changed == 0 {
                return Err(RepoError::NotFound {
                    entity: "author",
                    id,
                });
            }
            return Ok(id);
        }

        self.conn.execute(
            "INSERT INTO authors (name) VALUES (?1);",
            params![author.name()],
        )?;
        let id = self.conn.last_insert_rowid();
        author.assign_id(id);
        Ok(id)
    }

    fn find_by_id(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{AUTHOR_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(author_from_row(row)?));
        }
        Ok(None)
    }

    fn articles_by_author(&self, author_id: AuthorId) -> RepoResult<Vec<Article>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, author_id, magazine_id
             FROM articles
             WHERE author_id = ?1;",
        )?;
        let mut rows = stmt.query(params![author_id])?;
        let mut articles = Vec::new();
        while let Some(row) = rows.next()? {
            articles.push(article_from_positional(row)?);
        }
        Ok(articles)
    }

    fn magazines_of_author(&self, author_id: AuthorId) -> RepoResult<Vec<Magazine>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT m.id, m.name, m.category
             FROM magazines m
             JOIN articles a ON a.magazine_id = m.id
             WHERE a.author_id = ?1;",
        )?;
        let mut rows = stmt.query(params![author_id])?;
        let mut magazines = Vec::new();
        while let Some(row) = rows.next()? {
            magazines.push(magazine_from_positional(row)?);
        }
        Ok(magazines)
    }
}
