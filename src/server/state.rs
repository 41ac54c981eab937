//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It only carries the database connection
//! pool; every request builds its own services and entities from it.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// Cloning is cheap: `DatabaseConnection` is a connection pool and clones share it.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// Each repository call checks a connection out of this pool for the duration
    /// of a single statement.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state with the provided database connection pool.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
