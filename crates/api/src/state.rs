use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Nothing per-request lives here: round-trip counters are created inside
/// each handler call.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: orders_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
