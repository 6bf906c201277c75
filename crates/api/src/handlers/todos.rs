//! Handlers for the `/todos` resource.

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::Json;
use devsite_core::error::CoreError;
use devsite_core::types::DbId;
use devsite_db::models::todo::{CreateTodoForm, Todo, UpdateTodoForm};
use devsite_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /todos/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Todo>>>> {
    let todos = TodoRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: todos }))
}

/// POST /todos/create/
pub async fn create(
    State(state): State<AppState>,
    Form(input): Form<CreateTodoForm>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be empty".to_string(),
        )));
    }

    let todo = TodoRepo::create(
        &state.pool,
        input.title.trim(),
        input.description(),
        input.priority,
        input.status,
        input.due_date(),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// POST /todos/{id}/update/
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(input): Form<UpdateTodoForm>,
) -> AppResult<Json<Todo>> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be empty".to_string(),
        )));
    }

    let todo = TodoRepo::update(
        &state.pool,
        id,
        input.title.trim(),
        input.description(),
        input.priority,
        input.status,
        input.due_date(),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;
    Ok(Json(todo))
}

/// POST /todos/{id}/delete/
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TodoRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Todo", id }))
    }
}
