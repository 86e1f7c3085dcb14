pub mod book;

// Re-export the core types to provide a clean public API.
pub use book::{Book, BookId};
