//! HTTP client for the todo API.
//!
//! [`TodoApi`] wraps a `reqwest::Client` and maps each endpoint to one
//! method. Non-2xx replies are turned into [`ClientError::Api`] carrying
//! the server's `error` message when the body has one.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use todo_core::types::{DbId, UserId};

/// HTTP request timeout for a single API call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// A todo as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: DbId,
    pub user_id: UserId,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
struct CreateTodoBody<'a> {
    user_id: UserId,
    title: &'a str,
}

#[derive(Debug, Serialize)]
struct UpdateTodoBody<'a> {
    title: &'a str,
    completed: bool,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for API calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The underlying HTTP request failed (network, DNS, timeout, decoding).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },
}

// ---------------------------------------------------------------------------
// TodoApi
// ---------------------------------------------------------------------------

/// Typed access to the `/todos` endpoints.
#[derive(Debug, Clone)]
pub struct TodoApi {
    client: reqwest::Client,
    base_url: String,
}

impl TodoApi {
    /// Build a client for the API rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /todos
    pub async fn list(&self) -> Result<Vec<Todo>, ClientError> {
        let response = self.client.get(self.url("/todos")).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// POST /todos
    pub async fn create(&self, user_id: UserId, title: &str) -> Result<Todo, ClientError> {
        let response = self
            .client
            .post(self.url("/todos"))
            .json(&CreateTodoBody { user_id, title })
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// PUT /todos/{id}
    pub async fn update(
        &self,
        id: DbId,
        title: &str,
        completed: bool,
    ) -> Result<Todo, ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/todos/{id}")))
            .json(&UpdateTodoBody { title, completed })
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// DELETE /todos/{id}
    pub async fn delete(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/todos/{id}")))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Pass 2xx responses through; turn anything else into [`ClientError::Api`].
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or_else(|_| {
            if text.is_empty() {
                status.canonical_reason().unwrap_or("unknown error").to_string()
            } else {
                text
            }
        });

    tracing::warn!(status = status.as_u16(), %message, "API call failed");
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
