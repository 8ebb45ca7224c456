use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// There is no process-global state anywhere else; everything a handler needs
/// arrives through this struct.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: ticklist_db::DbPool,
    /// Server configuration (session TTL, timeouts).
    pub config: Arc<ServerConfig>,
}
