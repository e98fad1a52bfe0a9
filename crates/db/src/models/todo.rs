//! Todo entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::types::{DbId, UserId};
use utoipa::ToSchema;

/// A row from the `todos` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Todo {
    #[schema(value_type = i64)]
    pub id: DbId,
    #[schema(value_type = i64)]
    pub user_id: UserId,
    pub title: String,
    pub completed: bool,
}

/// DTO for creating a todo.
///
/// `title` is optional at the wire level so that a missing field can be
/// rejected with a validation error rather than a body parse failure.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTodo {
    #[schema(value_type = i64)]
    pub user_id: UserId,
    pub title: Option<String>,
}

/// DTO for replacing the mutable fields of a todo. Both fields are required.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateTodo {
    pub title: String,
    pub completed: bool,
}
