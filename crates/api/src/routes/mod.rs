pub mod health;
pub mod leetcode;
pub mod todos;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy (trailing slashes preserved from the original site):
///
/// ```text
/// /                                root liveness probe
/// /health/                         health check
///
/// /leetcode-daily/                 daily challenge (GET)
/// /leetcode-recent/                recent challenges, max 5 (GET)
/// /leetcode-question/{slug}/       question detail by slug (GET)
///
/// /todos/                          list (GET)
/// /todos/create/                   create (POST, form-encoded)
/// /todos/{id}/update/              update (POST, form-encoded)
/// /todos/{id}/delete/              delete (POST)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(leetcode::router())
        .merge(todos::router())
}
