use crate::ServiceError;
use core_types::{Book, BookId};
use database::BookStore;
use std::sync::Arc;

/// Use-case service for books.
///
/// Every operation forwards to the underlying [`BookStore`]. The one derived
/// decision is [`BookService::delete_book`], which reports whether a row was
/// actually removed.
#[derive(Clone)]
pub struct BookService {
    store: Arc<dyn BookStore>,
}

impl BookService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    pub async fn get_all_books(&self) -> Result<Vec<Book>, ServiceError> {
        Ok(self.store.find_all().await?)
    }

    pub async fn get_book_by_id(&self, id: BookId) -> Result<Option<Book>, ServiceError> {
        Ok(self.store.find_by_id(id).await?)
    }

    /// Inserts `book`; its `id` is ignored.
    pub async fn add_book(&self, book: &Book) -> Result<(), ServiceError> {
        self.store.save(book).await?;
        Ok(())
    }

    /// Replaces the stored fields of `book.id`. Succeeds even when no such row exists.
    pub async fn update_book(&self, book: &Book) -> Result<(), ServiceError> {
        let affected = self.store.update(book).await?;
        if affected == 0 {
            tracing::debug!(id = book.id, "Update matched no book.");
        }
        Ok(())
    }

    /// Deletes the book with the given id and returns whether one existed.
    ///
    /// Existence is decided by the affected-row count of the single delete
    /// statement, so two concurrent deletes of the same id never both report
    /// success.
    pub async fn delete_book(&self, id: BookId) -> Result<bool, ServiceError> {
        let affected = self.store.delete_by_id(id).await?;
        Ok(affected > 0)
    }
}
