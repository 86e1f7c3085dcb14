use crate::DbError;
use async_trait::async_trait;
use core_types::{Book, BookId};
use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;

/// The storage contract for books.
///
/// Every method issues exactly one statement. Mutating methods report the
/// number of rows the statement touched so callers can tell a no-op apart
/// from a real change.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Fetches every stored book, in storage order.
    async fn find_all(&self) -> Result<Vec<Book>, DbError>;

    /// Fetches the book with the given id, if any.
    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, DbError>;

    /// Inserts a new row. The `id` of `book` is ignored; storage assigns one.
    async fn save(&self, book: &Book) -> Result<u64, DbError>;

    /// Overwrites title, author and year of the row addressed by `book.id`.
    async fn update(&self, book: &Book) -> Result<u64, DbError>;

    /// Removes the row with the given id.
    async fn delete_by_id(&self, id: BookId) -> Result<u64, DbError>;
}

/// Maps a `books` result row to a [`Book`] by column name.
///
/// A missing column or a type mismatch is returned as an error rather than
/// defaulted.
pub fn book_from_row(row: &PgRow) -> Result<Book, sqlx::Error> {
    Ok(Book {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        author: row.try_get("author")?,
        published_year: row.try_get("published_year")?,
    })
}

/// The PostgreSQL implementation of [`BookStore`]. It holds the shared
/// connection pool and is cheap to clone.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for DbRepository {
    async fn find_all(&self) -> Result<Vec<Book>, DbError> {
        let rows = sqlx::query("SELECT id, title, author, published_year FROM books")
            .fetch_all(&self.pool)
            .await?;

        let books = rows
            .iter()
            .map(book_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(books)
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, DbError> {
        let row = sqlx::query("SELECT id, title, author, published_year FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(book_from_row).transpose()?)
    }

    async fn save(&self, book: &Book) -> Result<u64, DbError> {
        let result =
            sqlx::query("INSERT INTO books (title, author, published_year) VALUES ($1, $2, $3)")
                .bind(&book.title)
                .bind(&book.author)
                .bind(book.published_year)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected())
    }

    async fn update(&self, book: &Book) -> Result<u64, DbError> {
        let result = sqlx::query(
            "UPDATE books SET title = $1, author = $2, published_year = $3 WHERE id = $4",
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.published_year)
        .bind(book.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: BookId) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
