use masthead_core::db::open_db_in_memory;
use masthead_core::{
    Author, AuthorService, Magazine, MagazineService, SqliteArticleRepository,
    SqliteAuthorRepository, SqliteMagazineRepository,
};
use rusqlite::Connection;
use std::collections::HashSet;

fn services(
    conn: &Connection,
) -> (
    AuthorService<SqliteAuthorRepository<'_>, SqliteArticleRepository<'_>>,
    MagazineService<SqliteMagazineRepository<'_>>,
) {
    (
        AuthorService::new(
            SqliteAuthorRepository::new(conn),
            SqliteArticleRepository::new(conn),
        ),
        MagazineService::new(SqliteMagazineRepository::new(conn)),
    )
}

#[test]
fn contributors_are_distinct_by_identity() {
    let conn = open_db_in_memory().unwrap();
    let (authors, magazines) = services(&conn);

    let mut kate = Author::new("Kate").unwrap();
    let mut nina = Author::new("Nina").unwrap();
    let mut global = Magazine::new("Global News", "News").unwrap();
    authors.save(&mut kate).unwrap();
    authors.save(&mut nina).unwrap();
    magazines.save(&mut global).unwrap();

    authors.add_article(&kate, &global, "World").unwrap();
    authors.add_article(&kate, &global, "Economy").unwrap();
    authors.add_article(&nina, &global, "Politics").unwrap();

    let contributors = magazines.contributors(&global).unwrap();
    assert_eq!(contributors.len(), 2);

    let ids: HashSet<_> = contributors.iter().map(|a| a.id().unwrap()).collect();
    assert!(ids.contains(&kate.id().unwrap()));
    assert!(ids.contains(&nina.id().unwrap()));
}

#[test]
fn magazine_articles_hydrate_with_link_identities() {
    let conn = open_db_in_memory().unwrap();
    let (authors, magazines) = services(&conn);

    let mut kate = Author::new("Kate").unwrap();
    let mut global = Magazine::new("Global News", "News").unwrap();
    authors.save(&mut kate).unwrap();
    magazines.save(&mut global).unwrap();

    authors.add_article(&kate, &global, "World").unwrap();
    authors.add_article(&kate, &global, "Economy").unwrap();

    let articles = magazines.articles(&global).unwrap();
    assert_eq!(articles.len(), 2);
    for article in &articles {
        assert!(article.id().is_some());
        assert_eq!(article.author_id(), kate.id().unwrap());
        assert_eq!(article.magazine_id(), global.id().unwrap());
    }
    let titles: Vec<_> = articles.iter().map(|a| a.title()).collect();
    assert_eq!(titles, vec!["World", "Economy"]);
}

#[test]
fn article_titles_returns_titles_only() {
    let conn = open_db_in_memory().unwrap();
    let (authors, magazines) = services(&conn);

    let mut kate = Author::new("Kate").unwrap();
    let mut global = Magazine::new("Global News", "News").unwrap();
    authors.save(&mut kate).unwrap();
    magazines.save(&mut global).unwrap();

    authors.add_article(&kate, &global, "World").unwrap();
    authors.add_article(&kate, &global, "Economy").unwrap();

    let titles = magazines.article_titles(&global).unwrap();
    assert_eq!(titles, vec!["World".to_string(), "Economy".to_string()]);
}

#[test]
fn contributing_authors_require_strictly_more_than_two_articles() {
    let conn = open_db_in_memory().unwrap();
    let (authors, magazines) = services(&conn);

    let mut kate = Author::new("Kate").unwrap();
    let mut nina = Author::new("Nina").unwrap();
    let mut global = Magazine::new("Global News", "News").unwrap();
    authors.save(&mut kate).unwrap();
    authors.save(&mut nina).unwrap();
    magazines.save(&mut global).unwrap();

    // Kate qualifies with 3 articles; Nina stays below the threshold at 2.
    for title in ["World", "Economy", "Politics"] {
        authors.add_article(&kate, &global, title).unwrap();
    }
    for title in ["Sports", "Culture"] {
        authors.add_article(&nina, &global, title).unwrap();
    }

    let contributing = magazines.contributing_authors(&global).unwrap();
    assert_eq!(contributing.len(), 1);
    assert_eq!(contributing[0].name(), "Kate");
    assert_eq!(contributing[0].id(), kate.id());
}

#[test]
fn contributing_authors_empty_when_nobody_crosses_threshold() {
    let conn = open_db_in_memory().unwrap();
    let (authors, magazines) = services(&conn);

    let mut nina = Author::new("Nina").unwrap();
    let mut global = Magazine::new("Global News", "News").unwrap();
    authors.save(&mut nina).unwrap();
    magazines.save(&mut global).unwrap();

    authors.add_article(&nina, &global, "Sports").unwrap();
    authors.add_article(&nina, &global, "Culture").unwrap();

    assert!(magazines.contributing_authors(&global).unwrap().is_empty());
}

#[test]
fn top_publisher_returns_magazine_with_most_articles() {
    let conn = open_db_in_memory().unwrap();
    let (authors, magazines) = services(&conn);

    let mut kate = Author::new("Kate").unwrap();
    let mut global = Magazine::new("Global News", "News").unwrap();
    let mut tech = Magazine::new("Tech Review", "Technology").unwrap();
    authors.save(&mut kate).unwrap();
    magazines.save(&mut global).unwrap();
    magazines.save(&mut tech).unwrap();

    for title in ["World", "Economy", "Politics"] {
        authors.add_article(&kate, &global, title).unwrap();
    }
    authors.add_article(&kate, &tech, "AI Advances").unwrap();

    let top = magazines.top_publisher().unwrap().unwrap();
    assert_eq!(top.id(), global.id());
    assert_eq!(top.name(), "Global News");
}

#[test]
fn top_publisher_is_absent_without_any_articles() {
    let conn = open_db_in_memory().unwrap();
    let (_, magazines) = services(&conn);

    let mut global = Magazine::new("Global News", "News").unwrap();
    magazines.save(&mut global).unwrap();

    assert!(magazines.top_publisher().unwrap().is_none());
}
