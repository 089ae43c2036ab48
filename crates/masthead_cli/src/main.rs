//! Demo CLI entry point.
//!
//! # Responsibility
//! - Seed an in-memory database with a small author/magazine/article graph.
//! - Print every aggregate view once, keeping output deterministic for
//!   quick local sanity checks.

use masthead_core::db::open_db_in_memory;
use masthead_core::{
    default_log_level, init_logging, Author, AuthorService, Magazine, MagazineService,
    SqliteArticleRepository, SqliteAuthorRepository, SqliteMagazineRepository,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let log_dir = std::env::temp_dir().join("masthead-logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        // Demo output stays useful even when file logging cannot start.
        eprintln!("logging disabled: {err}");
    }

    println!("masthead_core version={}", masthead_core::core_version());

    let conn = open_db_in_memory()?;
    let authors = AuthorService::new(
        SqliteAuthorRepository::new(&conn),
        SqliteArticleRepository::new(&conn),
    );
    let magazines = MagazineService::new(SqliteMagazineRepository::new(&conn));

    let mut ian = Author::new("Ian")?;
    let mut sarah = Author::new("Sarah")?;
    authors.save(&mut ian)?;
    authors.save(&mut sarah)?;

    let mut nature = Magazine::new("Nature Weekly", "Science")?;
    let mut tech = Magazine::new("Tech World", "Technology")?;
    magazines.save(&mut nature)?;
    magazines.save(&mut tech)?;

    authors.add_article(&ian, &nature, "The Wonders of DNA")?;
    authors.add_article(&ian, &tech, "AI in 2025")?;
    authors.add_article(&sarah, &nature, "Climate Change Realities")?;

    let ian_articles = authors.articles(&ian)?;
    println!(
        "Ian's articles: {:?}",
        ian_articles.iter().map(|a| a.title()).collect::<Vec<_>>()
    );
    println!("Ian's articles (json): {}", serde_json::to_string(&ian_articles)?);

    println!(
        "Ian's magazines: {:?}",
        authors
            .magazines(&ian)?
            .iter()
            .map(|m| m.name())
            .collect::<Vec<_>>()
    );
    println!("Sarah's topics: {:?}", authors.topic_areas(&sarah)?);

    println!(
        "Tech World contributors: {:?}",
        magazines
            .contributors(&tech)?
            .iter()
            .map(|a| a.name())
            .collect::<Vec<_>>()
    );
    println!(
        "Nature Weekly titles: {:?}",
        magazines.article_titles(&nature)?
    );

    match magazines.top_publisher()? {
        Some(top) => println!("Top publisher: {}", top.name()),
        None => println!("Top publisher: none (no articles yet)"),
    }

    Ok(())
}
