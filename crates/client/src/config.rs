/// Default API base URL when neither `API_URL` nor `BACKEND_ORIGIN` is set.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Default owner id attached to newly created todos.
pub const DEFAULT_USER_ID: i64 = 1;

/// Client configuration loaded from environment variables.
///
/// | Variable         | Default                 |
/// |------------------|-------------------------|
/// | `API_URL`        | `BACKEND_ORIGIN`, else `http://localhost:8080` |
/// | `TODO_USER_ID`   | `1`                     |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub user_id: i64,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let api_url = std::env::var("API_URL")
            .or_else(|_| std::env::var("BACKEND_ORIGIN"))
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let user_id = std::env::var("TODO_USER_ID")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or_else(|| {
                tracing::debug!(default = DEFAULT_USER_ID, "TODO_USER_ID not set or invalid");
                DEFAULT_USER_ID
            });

        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            user_id,
        }
    }
}
