//! Handlers for the `/todos` resource.
//!
//! Body and path extraction failures are taken as `Result`s so they come
//! back as the same JSON error envelope as every other failure.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use todo_core::error::CoreError;
use todo_core::types::DbId;
use todo_core::validation;
use todo_db::models::todo::{CreateTodo, Todo, UpdateTodo};
use todo_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult, ErrorBody};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Todo", id })
}

/// GET /todos
#[utoipa::path(
    get,
    path = "/todos",
    tag = "todos",
    responses(
        (status = 200, description = "All todos ordered by id", body = Vec<Todo>),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Todo>>> {
    let todos = TodoRepo::list(&state.pool).await?;
    Ok(Json(todos))
}

/// POST /todos
#[utoipa::path(
    post,
    path = "/todos",
    tag = "todos",
    request_body = CreateTodo,
    responses(
        (status = 201, description = "Todo created", body = Todo),
        (status = 400, description = "Missing or blank title", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    let Json(input) = payload?;
    validation::require_title(input.title.as_deref())?;

    let todo = TodoRepo::create(&state.pool, &input).await?;
    tracing::info!(todo_id = todo.id, user_id = todo.user_id, "Todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /todos/{id}
#[utoipa::path(
    put,
    path = "/todos/{id}",
    tag = "todos",
    params(("id" = i64, Path, description = "Todo id")),
    request_body = UpdateTodo,
    responses(
        (status = 200, description = "Todo updated", body = Todo),
        (status = 400, description = "Blank title or malformed body", body = ErrorBody),
        (status = 404, description = "No todo with this id", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<UpdateTodo>, JsonRejection>,
) -> AppResult<Json<Todo>> {
    let Path(id) = path?;
    let Json(input) = payload?;
    validation::validate_title(&input.title)?;

    let todo = TodoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(todo_id = id, completed = todo.completed, "Todo updated");
    Ok(Json(todo))
}

/// DELETE /todos/{id}
#[utoipa::path(
    delete,
    path = "/todos/{id}",
    tag = "todos",
    params(("id" = i64, Path, description = "Todo id")),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 404, description = "No todo with this id", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = path?;
    if TodoRepo::delete(&state.pool, id).await? {
        tracing::info!(todo_id = id, "Todo deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
