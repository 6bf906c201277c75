//! Route definitions for the LeetCode gateway endpoints.
//!
//! All three endpoints answer 200 with a `{payload|null, error|null}`
//! body; upstream failures never surface as HTTP errors here.

use axum::routing::get;
use axum::Router;

use crate::handlers::leetcode;
use crate::state::AppState;

/// Routes mounted at the root level.
///
/// ```text
/// GET /leetcode-daily/               -> daily
/// GET /leetcode-recent/              -> recent
/// GET /leetcode-question/{slug}/     -> question_detail
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/leetcode-daily/", get(leetcode::daily))
        .route("/leetcode-recent/", get(leetcode::recent))
        .route("/leetcode-question/{slug}/", get(leetcode::question_detail))
}
