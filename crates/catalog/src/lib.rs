//! The service layer: a stateless façade between the HTTP handlers and the
//! storage layer.

pub mod error;
pub mod service;

pub use error::ServiceError;
pub use service::BookService;
