//! Route definitions for the todo list.
//!
//! The create/update/delete endpoints accept form-encoded payloads and
//! keep the original site's POST-per-action paths.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::todos;
use crate::state::AppState;

/// Routes mounted at `/todos`.
///
/// ```text
/// GET  /todos/                -> list
/// POST /todos/create/         -> create
/// POST /todos/{id}/update/    -> update
/// POST /todos/{id}/delete/    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/todos/", get(todos::list))
        .route("/todos/create/", post(todos::create))
        .route("/todos/{id}/update/", post(todos::update))
        .route("/todos/{id}/delete/", post(todos::delete))
}
