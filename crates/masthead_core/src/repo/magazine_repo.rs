//! Magazine repository contract and SQLite implementation.
//!
//! Owns the magazine-scoped relationship queries (articles, contributors,
//! titles, contributing authors) and the system-wide top-publisher
//! aggregate.

use super::{
    article_from_positional, author_from_positional, author_from_row, magazine_from_row, RepoError,
    RepoResult,
};
use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::magazine::Magazine;
use crate::model::{AuthorId, MagazineId};
use rusqlite::{params, Connection};

const MAGAZINE_SELECT_SQL: &str = "SELECT id, name, category FROM magazines";

/// An author qualifies as "contributing" with strictly more than this many
/// articles in one magazine. Fixed design constant, not configurable.
pub const CONTRIBUTING_AUTHOR_THRESHOLD: i64 = 2;

/// Repository interface for magazine persistence and aggregates.
pub trait MagazineRepository {
    /// Inserts when the magazine has no identity, updates otherwise.
    fn save(&self, magazine: &mut Magazine) -> RepoResult<MagazineId>;

    /// Fetches one magazine; absence is `Ok(None)`, never an error.
    fn find_by_id(&self, id: MagazineId) -> RepoResult<Option<Magazine>>;

    /// All articles published in this magazine, in backend order.
    fn articles_in_magazine(&self, magazine_id: MagazineId) -> RepoResult<Vec<Article>>;

    /// Distinct authors (by identity) with at least one article here.
    fn contributors(&self, magazine_id: MagazineId) -> RepoResult<Vec<Author>>;

    /// Titles only, without hydrating full article records.
    fn article_titles(&self, magazine_id: MagazineId) -> RepoResult<Vec<String>>;

    /// Authors with strictly more than [`CONTRIBUTING_AUTHOR_THRESHOLD`]
    /// articles in this magazine.
    fn contributing_authors(&self, magazine_id: MagazineId) -> RepoResult<Vec<Author>>;

    /// The magazine with the most articles system-wide, or `None` when no
    /// articles exist at all. Ties between equal counts follow backend row
    /// order; the tie-break is deliberately left unspecified.
    fn top_publisher(&self) -> RepoResult<Option<Magazine>>;
}

/// SQLite-backed magazine repository over a borrowed connection.
pub struct SqliteMagazineRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMagazineRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn author_by_id(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM authors WHERE id = ?1;")?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(author_from_row(row)?));
        }
        Ok(None)
    }
}

impl MagazineRepository for SqliteMagazineRepository<'_> {
    fn save(&self, magazine: &mut Magazine) -> RepoResult<MagazineId> {
        if let Some(id) = magazine.id() {
            let changed = self.conn.execute(
                "UPDATE magazines SET name = ?1, category = ?2 WHERE id = ?3;",
                params![magazine.name(), magazine.category(), id],
            )?;
            if changed == 0 {
                return Err(RepoError::NotFound {
                    entity: "magazine",
                    id,
                });
            }
            return Ok(id);
        }

        self.conn.execute(
            "INSERT INTO magazines (name, category) VALUES (?1, ?2);",
            params![magazine.name(), magazine.category()],
        )?;
        let id = self.conn.last_insert_rowid();
        magazine.assign_id(id);
        Ok(id)
    }

    fn find_by_id(&self, id: MagazineId) -> RepoResult<Option<Magazine>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MAGAZINE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(magazine_from_row(row)?));
        }
        Ok(None)
    }

    fn articles_in_magazine(&self, magazine_id: MagazineId) -> RepoResult<Vec<Article>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, author_id, magazine_id
             FROM articles
             WHERE magazine_id = ?1;",
        )?;
        let mut rows = stmt.query(params![magazine_id])?;
        let mut articles = Vec::new();
        while let Some(row) = rows.next()? {
            articles.push(article_from_positional(row)?);
        }
        Ok(articles)
    }

    fn contributors(&self, magazine_id: MagazineId) -> RepoResult<Vec<Author>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT au.id, au.name
             FROM authors au
             JOIN articles a ON a.author_id = au.id
             WHERE a.magazine_id = ?1;",
        )?;
        let mut rows = stmt.query(params![magazine_id])?;
        let mut authors = Vec::new();
        while let Some(row) = rows.next()? {
            authors.push(author_from_positional(row)?);
        }
        Ok(authors)
    }

    fn article_titles(&self, magazine_id: MagazineId) -> RepoResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT title FROM articles WHERE magazine_id = ?1;")?;
        let mut rows = stmt.query(params![magazine_id])?;
        let mut titles = Vec::new();
        while let Some(row) = rows.next()? {
            titles.push(row.get::<_, String>(0)?);
        }
        Ok(titles)
    }

    fn contributing_authors(&self, magazine_id: MagazineId) -> RepoResult<Vec<Author>> {
        let mut stmt = self.conn.prepare(
            "SELECT author_id
             FROM articles
             WHERE magazine_id = ?1
             GROUP BY author_id
             HAVING COUNT(id) > ?2;",
        )?;
        let mut rows = stmt.query(params![magazine_id, CONTRIBUTING_AUTHOR_THRESHOLD])?;
        let mut author_ids: Vec<AuthorId> = Vec::new();
        while let Some(row) = rows.next()? {
            author_ids.push(row.get(0)?);
        }

        let mut authors = Vec::with_capacity(author_ids.len());
        for author_id in author_ids {
            // Foreign keys guarantee the author row exists; a miss here
            // means the store was modified without enforcement enabled.
            let author = self.author_by_id(author_id)?.ok_or_else(|| {
                RepoError::InvalidData(format!(
                    "articles reference missing author {author_id}"
                ))
            })?;
            authors.push(author);
        }
        Ok(authors)
    }

    fn top_publisher(&self) -> RepoResult<Option<Magazine>> {
        let mut stmt = self.conn.prepare(
            "SELECT magazine_id, COUNT(id) AS article_count
             FROM articles
             GROUP BY magazine_id
             ORDER BY article_count DESC
             LIMIT 1;",
        )?;
        let mut rows = stmt.query([])?;
        let Some(row) = rows.next()? else {
            return Ok(None);
        };
        let magazine_id: MagazineId = row.get(0)?;

        let magazine = self.find_by_id(magazine_id)?.ok_or_else(|| {
            RepoError::InvalidData(format!(
                "articles reference missing magazine {magazine_id}"
            ))
        })?;
        Ok(Some(magazine))
    }
}
