use serde::{Deserialize, Serialize};

/// Identifier assigned to a book by the storage layer.
pub type BookId = i64;

/// The single entity managed by the service, persisted as one row of `books`.
///
/// Deserialization is lenient: any field missing from a request body takes its
/// default value. On create the `id` is ignored and assigned by storage; on
/// update it is overwritten by the id taken from the request path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub published_year: i32,
}

impl Book {
    /// Builds a book that has not been stored yet (`id` is zero).
    pub fn new(title: impl Into<String>, author: impl Into<String>, published_year: i32) -> Self {
        Self {
            id: 0,
            title: title.into(),
            author: author.into(),
            published_year,
        }
    }

    /// Returns the same book addressed by `id`.
    pub fn with_id(mut self, id: BookId) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_camel_case_year() {
        let book = Book::new("Dune", "Herbert", 1965).with_id(7);
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(
            value,
            json!({ "id": 7, "title": "Dune", "author": "Herbert", "publishedYear": 1965 })
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let book: Book = serde_json::from_str(r#"{"title":"Dune"}"#).unwrap();
        assert_eq!(book.id, 0);
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "");
        assert_eq!(book.published_year, 0);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let book: Book =
            serde_json::from_str(r#"{"id":3,"title":"Emma","author":"Austen","publishedYear":1815,"isbn":"x"}"#)
                .unwrap();
        assert_eq!(book, Book::new("Emma", "Austen", 1815).with_id(3));
    }
}
