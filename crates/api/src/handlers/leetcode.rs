//! Handlers for the LeetCode gateway endpoints.
//!
//! Each handler delegates to the gateway and renders its result object
//! verbatim. The gateway guarantees the result carries exactly one of
//! payload or error, so these handlers always answer 200 and never
//! need an error path of their own.

use axum::extract::{Path, State};
use axum::Json;
use devsite_leetcode::gateway::{
    DailyChallengeResult, QuestionDetailResult, RecentChallengesResult,
};

use crate::state::AppState;

/// GET /leetcode-daily/
pub async fn daily(State(state): State<AppState>) -> Json<DailyChallengeResult> {
    Json(state.gateway.daily().await)
}

/// GET /leetcode-recent/
pub async fn recent(State(state): State<AppState>) -> Json<RecentChallengesResult> {
    Json(state.gateway.recent().await)
}

/// GET /leetcode-question/{slug}/
pub async fn question_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Json<QuestionDetailResult> {
    Json(state.gateway.question_detail(&slug).await)
}
