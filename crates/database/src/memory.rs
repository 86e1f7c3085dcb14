use crate::{BookStore, DbError};
use async_trait::async_trait;
use core_types::{Book, BookId};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// A non-durable [`BookStore`] kept in process memory.
///
/// Ids start at 1 and are never reused, matching a `BIGSERIAL` column.
/// `find_all` returns books in ascending id order.
#[derive(Debug, Default)]
pub struct InMemoryBookStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    books: BTreeMap<BookId, Book>,
    last_id: BookId,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for InMemoryBookStore {
    async fn find_all(&self) -> Result<Vec<Book>, DbError> {
        Ok(self.inner.read().await.books.values().cloned().collect())
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, DbError> {
        Ok(self.inner.read().await.books.get(&id).cloned())
    }

    async fn save(&self, book: &Book) -> Result<u64, DbError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let id = inner.last_id;
        inner.books.insert(id, book.clone().with_id(id));
        Ok(1)
    }

    async fn update(&self, book: &Book) -> Result<u64, DbError> {
        let mut inner = self.inner.write().await;
        match inner.books.get_mut(&book.id) {
            Some(stored) => {
                stored.title = book.title.clone();
                stored.author = book.author.clone();
                stored.published_year = book.published_year;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: BookId) -> Result<u64, DbError> {
        let removed = self.inner.write().await.books.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}
