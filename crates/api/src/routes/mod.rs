pub mod docs;
pub mod health;
pub mod todo;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /todos                  list, create
/// /todos/{id}             update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/todos", todo::router())
}
