//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Shared resources available to every request handler.
///
/// Initialized once during server startup and cloned per request through Axum's
/// state extraction. `DatabaseConnection` is a pool, so clones share connections.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
