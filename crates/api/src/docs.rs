//! OpenAPI documentation for the HTTP surface.
//!
//! [`ApiDoc`] collects the annotated handlers and their DTO schemas. The
//! document and its Swagger UI are served by [`crate::routes::docs`].

use todo_db::models::todo::{CreateTodo, Todo, UpdateTodo};
use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::handlers;
use crate::routes::health::{self, HealthResponse};

/// OpenAPI document for the todo API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo API",
        description = "CRUD access to the todo list and a health probe."
    ),
    paths(
        health::health_check,
        handlers::todo::list,
        handlers::todo::create,
        handlers::todo::update,
        handlers::todo::delete,
    ),
    components(schemas(Todo, CreateTodo, UpdateTodo, ErrorBody, HealthResponse)),
    tags(
        (name = "todos", description = "Todo items"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;
