//! Shared application state.

use database::postgres::DatabaseConnection;

/// Cloned into every sub-router; the connection is a pool handle.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: DatabaseConnection,
}
