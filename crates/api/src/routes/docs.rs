//! Serves the generated OpenAPI document and the Swagger UI over it.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::state::AppState;

/// Mount the Swagger UI at `/api-docs` and the raw document at
/// `GET /api-docs/openapi.json`.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
