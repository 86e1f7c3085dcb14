use crate::{error::AppError, AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use core_types::{Book, BookId};
use std::sync::Arc;

pub const BOOK_ADDED: &str = "Book added successfully";
pub const BOOK_UPDATED: &str = "Book updated successfully";
pub const BOOK_DELETED: &str = "Book deleted successfully";
pub const BOOK_NOT_FOUND: &str = "Book not found";

/// # GET /api/books
pub async fn get_all_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Book>>, AppError> {
    let books = state.books.get_all_books().await?;
    tracing::debug!(count = books.len(), "Listed books.");
    Ok(Json(books))
}

/// # GET /api/books/:id
/// Answers 404 with an empty body when the id is unknown.
pub async fn get_book_by_id(
    Path(id): Path<BookId>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, AppError> {
    match state.books.get_book_by_id(id).await? {
        Some(book) => Ok(Json(book).into_response()),
        None => {
            tracing::debug!(id, "Book not found.");
            Ok(StatusCode::NOT_FOUND.into_response())
        }
    }
}

/// # POST /api/books
/// The assigned id is not echoed back.
pub async fn add_book(
    State(state): State<Arc<AppState>>,
    Json(book): Json<Book>,
) -> Result<&'static str, AppError> {
    state.books.add_book(&book).await?;
    tracing::info!(title = %book.title, "Book added.");
    Ok(BOOK_ADDED)
}

/// # PUT /api/books/:id
/// The path id wins over any id in the body.
pub async fn update_book(
    Path(id): Path<BookId>,
    State(state): State<Arc<AppState>>,
    Json(book): Json<Book>,
) -> Result<&'static str, AppError> {
    let book = book.with_id(id);
    state.books.update_book(&book).await?;
    tracing::info!(id, "Book updated.");
    Ok(BOOK_UPDATED)
}

/// # DELETE /api/books/:id
pub async fn delete_book(
    Path(id): Path<BookId>,
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, &'static str), AppError> {
    if state.books.delete_book(id).await? {
        tracing::info!(id, "Book deleted.");
        Ok((StatusCode::OK, BOOK_DELETED))
    } else {
        Ok((StatusCode::NOT_FOUND, BOOK_NOT_FOUND))
    }
}
