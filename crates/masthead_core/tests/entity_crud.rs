use masthead_core::db::open_db_in_memory;
use masthead_core::{
    Article, ArticleRepository, Author, AuthorRepository, Magazine, MagazineRepository, RepoError,
    SqliteArticleRepository, SqliteAuthorRepository, SqliteMagazineRepository,
};

#[test]
fn author_save_assigns_identity_and_roundtrips() {
    let conn = open_db_in_memory().unwrap();
    let authors = SqliteAuthorRepository::new(&conn);

    let mut author = Author::new("Kate").unwrap();
    assert_eq!(author.id(), None);

    let id = authors.save(&mut author).unwrap();
    assert_eq!(author.id(), Some(id));

    let loaded = authors.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded, author);
}

#[test]
fn magazine_update_persists_field_changes() {
    let conn = open_db_in_memory().unwrap();
    let magazines = SqliteMagazineRepository::new(&conn);

    let mut magazine = Magazine::new("Global News", "News").unwrap();
    let id = magazines.save(&mut magazine).unwrap();

    magazine.set_name("World Press").unwrap();
    magazine.set_category("Politics").unwrap();
    let updated_id = magazines.save(&mut magazine).unwrap();
    assert_eq!(updated_id, id, "identity never changes once assigned");

    let loaded = magazines.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded.name(), "World Press");
    assert_eq!(loaded.category(), "Politics");
}

#[test]
fn article_save_and_fetch_roundtrips() {
    let conn = open_db_in_memory().unwrap();
    let authors = SqliteAuthorRepository::new(&conn);
    let magazines = SqliteMagazineRepository::new(&conn);
    let articles = SqliteArticleRepository::new(&conn);

    let mut author = Author::new("Kate").unwrap();
    let mut magazine = Magazine::new("Global News", "News").unwrap();
    authors.save(&mut author).unwrap();
    magazines.save(&mut magazine).unwrap();

    let mut article = Article::new("World", &author, &magazine).unwrap();
    let id = articles.save(&mut article).unwrap();

    let loaded = articles.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded.title(), "World");
    assert_eq!(loaded.author_id(), author.id().unwrap());
    assert_eq!(loaded.magazine_id(), magazine.id().unwrap());
}

#[test]
fn persisted_article_serializes_with_link_identities() {
    let conn = open_db_in_memory().unwrap();
    let authors = SqliteAuthorRepository::new(&conn);
    let magazines = SqliteMagazineRepository::new(&conn);
    let articles = SqliteArticleRepository::new(&conn);

    let mut author = Author::new("Kate").unwrap();
    let mut magazine = Magazine::new("Global News", "News").unwrap();
    authors.save(&mut author).unwrap();
    magazines.save(&mut magazine).unwrap();

    let mut article = Article::new("World", &author, &magazine).unwrap();
    let id = articles.save(&mut article).unwrap();

    let json = serde_json::to_value(&article).unwrap();
    assert_eq!(json["id"], serde_json::json!(id));
    assert_eq!(json["title"], "World");
    assert_eq!(json["author_id"], serde_json::json!(author.id().unwrap()));
    assert_eq!(
        json["magazine_id"],
        serde_json::json!(magazine.id().unwrap())
    );
}

#[test]
fn find_by_id_returns_none_for_missing_rows() {
    let conn = open_db_in_memory().unwrap();

    assert!(SqliteAuthorRepository::new(&conn)
        .find_by_id(42)
        .unwrap()
        .is_none());
    assert!(SqliteMagazineRepository::new(&conn)
        .find_by_id(42)
        .unwrap()
        .is_none());
    assert!(SqliteArticleRepository::new(&conn)
        .find_by_id(42)
        .unwrap()
        .is_none());
}

#[test]
fn updating_a_deleted_row_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let authors = SqliteAuthorRepository::new(&conn);

    let mut author = Author::new("Kate").unwrap();
    let id = authors.save(&mut author).unwrap();
    conn.execute("DELETE FROM authors WHERE id = ?1;", [id])
        .unwrap();

    let err = authors.save(&mut author).unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound {
            entity: "author",
            id: missing
        } if missing == id
    ));
}

#[test]
fn dangling_article_reference_is_a_constraint_error() {
    let conn = open_db_in_memory().unwrap();

    // Bypass the entity layer on purpose: with foreign-key enforcement on,
    // the backend itself must reject the write.
    let err = conn
        .execute(
            "INSERT INTO articles (title, author_id, magazine_id) VALUES ('X', 999, 999);",
            [],
        )
        .unwrap_err();
    assert!(matches!(RepoError::from(err), RepoError::Constraint(_)));
}

#[test]
fn deleting_an_author_cascades_to_their_articles() {
    let conn = open_db_in_memory().unwrap();
    let authors = SqliteAuthorRepository::new(&conn);
    let magazines = SqliteMagazineRepository::new(&conn);
    let articles = SqliteArticleRepository::new(&conn);

    let mut author = Author::new("Kate").unwrap();
    let mut magazine = Magazine::new("Global News", "News").unwrap();
    authors.save(&mut author).unwrap();
    magazines.save(&mut magazine).unwrap();

    let mut article = Article::new("World", &author, &magazine).unwrap();
    let article_id = articles.save(&mut article).unwrap();

    conn.execute("DELETE FROM authors WHERE id = ?1;", [author.id().unwrap()])
        .unwrap();

    assert!(articles.find_by_id(article_id).unwrap().is_none());
}
