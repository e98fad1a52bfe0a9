/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable. Holds no mutable data: every request reads and
/// writes through the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: todo_db::DbPool,
}
