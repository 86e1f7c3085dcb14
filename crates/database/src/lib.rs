//! # Bookshelf Database Crate
//!
//! The storage layer of the service. It owns every SQL statement issued
//! against the `books` table and maps result rows to [`core_types::Book`].
//!
//! ## Public API
//!
//! - `connect`: establishes the PostgreSQL connection pool.
//! - `run_migrations`: applies the embedded schema migrations.
//! - `BookStore`: the storage contract used by the service layer.
//! - `DbRepository`: the PostgreSQL implementation of `BookStore`.
//! - `InMemoryBookStore`: a non-durable implementation with identical semantics.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod memory;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use error::DbError;
pub use memory::InMemoryBookStore;
pub use repository::{book_from_row, BookStore, DbRepository};

// Callers that construct or match on `DbError::QueryError` need the driver's error type.
pub use sqlx;
