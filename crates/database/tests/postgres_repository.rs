//! Integration tests against a live PostgreSQL instance.
//!
//! Run with `DATABASE_URL` pointing at a disposable database:
//! `cargo test -p database -- --ignored`

use configuration::DatabaseSettings;
use core_types::Book;
use database::{connect, run_migrations, BookStore, DbRepository};

async fn repository() -> DbRepository {
    let pool = connect(&DatabaseSettings::default()).await.unwrap();
    run_migrations(&pool).await.unwrap();
    sqlx::query("TRUNCATE books RESTART IDENTITY")
        .execute(&pool)
        .await
        .unwrap();
    DbRepository::new(pool)
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn save_then_find_maps_every_column() {
    let repo = repository().await;
    assert_eq!(repo.save(&Book::new("Dune", "Herbert", 1965)).await.unwrap(), 1);

    let books = repo.find_all().await.unwrap();
    assert_eq!(books.len(), 1);
    let stored = &books[0];
    assert_eq!((stored.title.as_str(), stored.author.as_str(), stored.published_year), ("Dune", "Herbert", 1965));
    assert_eq!(repo.find_by_id(stored.id).await.unwrap().as_ref(), Some(stored));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn update_and_delete_report_affected_rows() {
    let repo = repository().await;
    repo.save(&Book::new("Dune", "Herbert", 1965)).await.unwrap();
    let id = repo.find_all().await.unwrap()[0].id;

    let changed = Book::new("Dune Messiah", "Herbert", 1969).with_id(id);
    assert_eq!(repo.update(&changed).await.unwrap(), 1);
    assert_eq!(repo.find_by_id(id).await.unwrap(), Some(changed));
    assert_eq!(repo.update(&Book::new("x", "y", 1).with_id(id + 100)).await.unwrap(), 0);

    assert_eq!(repo.delete_by_id(id).await.unwrap(), 1);
    assert_eq!(repo.delete_by_id(id).await.unwrap(), 0);
    assert!(repo.find_by_id(id).await.unwrap().is_none());
}
