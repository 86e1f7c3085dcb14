use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::get,
    Router,
};
use catalog::BookService;
use configuration::Settings;
use database::{BookStore, DbRepository, InMemoryBookStore};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub books: BookService,
}

impl AppState {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self {
            books: BookService::new(store),
        }
    }
}

/// Where the server keeps its books.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// The `books` table in PostgreSQL.
    Postgres,
    /// Process memory; everything is lost on shutdown.
    InMemory,
}

/// Builds the application router.
///
/// An empty `cors_origins` list allows any origin; origins that are not valid
/// header values are skipped with a warning.
pub fn build_router(state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let allow_origin = if cors_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = cors_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "Ignoring invalid CORS origin.");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::any())
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route(
            "/api/books",
            get(handlers::get_all_books).post(handlers::add_book),
        )
        .route(
            "/api/books/:id",
            get(handlers::get_book_by_id)
                .put(handlers::update_book)
                .delete(handlers::delete_book),
        )
        .with_state(state)
        .layer(cors)
        // Logs every incoming request and its response status.
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(1024 * 1024))
}

/// Connects the storage backend and serves the API until Ctrl-C is received.
pub async fn run_server(settings: &Settings, backend: StorageBackend) -> anyhow::Result<()> {
    let store: Arc<dyn BookStore> = match backend {
        StorageBackend::Postgres => {
            let db_pool = database::connect(&settings.database).await?;
            if settings.database.run_migrations {
                database::run_migrations(&db_pool).await?;
            }
            Arc::new(DbRepository::new(db_pool))
        }
        StorageBackend::InMemory => {
            tracing::warn!("Using the in-memory store; books will not survive a restart.");
            Arc::new(InMemoryBookStore::new())
        }
    };

    let app_state = Arc::new(AppState::new(store));
    let app = build_router(app_state, &settings.server.cors_origins);

    let addr = settings.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Web server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for the shutdown signal.");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received.");
}
