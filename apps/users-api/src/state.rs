//! Shared application state.

use database::postgres::DatabaseConnection;

/// Cloned into handlers that need it (the connection is an Arc'd pool).
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: DatabaseConnection,
}
