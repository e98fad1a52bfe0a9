//! Repository for the `todos` table.

use sqlx::PgPool;
use todo_core::types::DbId;

use crate::models::todo::{CreateTodo, Todo, UpdateTodo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, title, completed";

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new todo, returning the created row.
    ///
    /// `completed` is left to the column default (`false`). A `None` title
    /// is bound as NULL and rejected by the `NOT NULL` constraint.
    pub async fn create(pool: &PgPool, input: &CreateTodo) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (user_id, title)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(input.user_id)
            .bind(&input.title)
            .fetch_one(pool)
            .await
    }

    /// Find a todo by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all todos ordered by ascending ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos ORDER BY id ASC");
        sqlx::query_as::<_, Todo>(&query).fetch_all(pool).await
    }

    /// Overwrite `title` and `completed`. `id` and `user_id` are never touched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTodo,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "UPDATE todos SET
                title = $2,
                completed = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.completed)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a todo by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
