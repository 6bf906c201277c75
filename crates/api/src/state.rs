use std::sync::Arc;

use devsite_leetcode::LeetCodeGateway;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: devsite_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// LeetCode gateway (upstream client + normalization policies).
    pub gateway: Arc<LeetCodeGateway>,
}
