//! End-to-end tests for the client against an in-process stub of the API.
//!
//! The stub mimics the real endpoints (status codes, JSON error bodies)
//! on top of an in-memory list, and records every write it receives so
//! tests can assert which calls were made.

use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use todo_client::api::{ClientError, Todo, TodoApi};
use todo_client::app::{App, Flow};
use todo_client::command::Command;

// ---------------------------------------------------------------------------
// Stub server
// ---------------------------------------------------------------------------

#[derive(Default)]
struct StubData {
    todos: Vec<Todo>,
    next_id: i64,
    fail_writes: bool,
    writes: Vec<(String, Value)>,
}

#[derive(Clone, Default)]
struct Stub(Arc<Mutex<StubData>>);

impl Stub {
    fn writes(&self) -> Vec<(String, Value)> {
        self.0.lock().unwrap().writes.clone()
    }

    fn set_fail_writes(&self, fail: bool) {
        self.0.lock().unwrap().fail_writes = fail;
    }

    fn seed(&self, title: &str, completed: bool) -> Todo {
        let mut data = self.0.lock().unwrap();
        data.next_id += 1;
        let todo = Todo {
            id: data.next_id,
            user_id: 1,
            title: title.to_string(),
            completed,
        };
        data.todos.push(todo.clone());
        todo
    }
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({"error": message, "code": "X"}))).into_response()
}

async fn list(State(stub): State<Stub>) -> Json<Vec<Todo>> {
    Json(stub.0.lock().unwrap().todos.clone())
}

async fn create(State(stub): State<Stub>, Json(body): Json<Value>) -> Response {
    let mut data = stub.0.lock().unwrap();
    data.writes.push(("POST".into(), body.clone()));
    if data.fail_writes {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "An internal error occurred");
    }
    data.next_id += 1;
    let todo = Todo {
        id: data.next_id,
        user_id: body["user_id"].as_i64().unwrap_or_default(),
        title: body["title"].as_str().unwrap_or_default().to_string(),
        completed: false,
    };
    data.todos.push(todo.clone());
    (StatusCode::CREATED, Json(todo)).into_response()
}

async fn update(
    State(stub): State<Stub>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut data = stub.0.lock().unwrap();
    data.writes.push((format!("PUT {id}"), body.clone()));
    if data.fail_writes {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "An internal error occurred");
    }
    match data.todos.iter_mut().find(|t| t.id == id) {
        Some(todo) => {
            todo.title = body["title"].as_str().unwrap_or_default().to_string();
            todo.completed = body["completed"].as_bool().unwrap_or_default();
            Json(todo.clone()).into_response()
        }
        None => error(StatusCode::NOT_FOUND, "Todo not found"),
    }
}

async fn delete(State(stub): State<Stub>, Path(id): Path<i64>) -> Response {
    let mut data = stub.0.lock().unwrap();
    data.writes.push((format!("DELETE {id}"), Value::Null));
    if data.fail_writes {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "An internal error occurred");
    }
    let before = data.todos.len();
    data.todos.retain(|t| t.id != id);
    if data.todos.len() == before {
        return error(StatusCode::NOT_FOUND, "Todo not found");
    }
    StatusCode::NO_CONTENT.into_response()
}

/// Start the stub on an ephemeral port and return its base URL.
async fn start_stub(stub: Stub) -> String {
    let app = Router::new()
        .route("/todos", get(list).post(create))
        .route("/todos/{id}", put(update).delete(delete))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn app_with(stub: &Stub) -> App {
    let url = start_stub(stub.clone()).await;
    let mut app = App::new(TodoApi::new(&url).unwrap(), 1);
    app.load().await;
    app
}

// ---------------------------------------------------------------------------
// TodoApi
// ---------------------------------------------------------------------------

#[tokio::test]
async fn api_covers_every_endpoint() {
    let stub = Stub::default();
    let api = TodoApi::new(&start_stub(stub.clone()).await).unwrap();

    let created = api.create(1, "Buy milk").await.unwrap();
    assert!(!created.completed);

    let updated = api.update(created.id, "Buy milk", true).await.unwrap();
    assert!(updated.completed);

    assert_eq!(api.list().await.unwrap(), vec![updated]);

    api.delete(created.id).await.unwrap();
    assert!(api.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn api_maps_error_body_into_client_error() {
    let stub = Stub::default();
    let api = TodoApi::new(&start_stub(stub).await).unwrap();

    let err = api.update(999_999, "ghost", false).await.unwrap_err();
    assert_matches!(
        err,
        ClientError::Api { status: 404, ref message } if message == "Todo not found"
    );
}

#[tokio::test]
async fn api_reports_unreachable_server() {
    // Bind and drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = TodoApi::new(&format!("http://{addr}")).unwrap();
    assert_matches!(api.list().await, Err(ClientError::Request(_)));
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

#[tokio::test]
async fn load_fetches_existing_rows() {
    let stub = Stub::default();
    let first = stub.seed("first", false);
    let second = stub.seed("second", true);

    let app = app_with(&stub).await;
    assert_eq!(app.state().todos(), &[first, second]);
}

#[tokio::test]
async fn add_appends_server_row() {
    let stub = Stub::default();
    let mut app = app_with(&stub).await;

    let flow = app.execute(Command::Add("Buy milk".into())).await;

    assert_eq!(flow, Flow::Continue);
    assert_eq!(app.state().todos().len(), 1);
    assert_eq!(app.state().todos()[0].title, "Buy milk");
    assert_eq!(
        stub.writes(),
        vec![("POST".to_string(), json!({"user_id": 1, "title": "Buy milk"}))]
    );
}

#[tokio::test]
async fn blank_title_is_rejected_without_a_request() {
    let stub = Stub::default();
    let mut app = app_with(&stub).await;

    app.execute(Command::Add("   ".into())).await;

    assert!(stub.writes().is_empty());
    assert!(app.state().todos().is_empty());
    assert!(app.state().last_error().is_some());
}

#[tokio::test]
async fn save_sends_edited_title_and_checkbox() {
    let stub = Stub::default();
    let todo = stub.seed("Buy milk", false);
    let mut app = app_with(&stub).await;

    app.execute(Command::Edit(todo.id)).await;
    app.execute(Command::Title("Buy oat milk".into())).await;
    app.execute(Command::Toggle).await;

    // Nothing is sent, and the list is unchanged, until save.
    assert!(stub.writes().is_empty());
    assert!(!app.state().todos()[0].completed);

    app.execute(Command::Save).await;

    assert_eq!(
        stub.writes(),
        vec![(
            format!("PUT {}", todo.id),
            json!({"title": "Buy oat milk", "completed": true})
        )]
    );
    assert!(app.state().editing().is_none());
    assert_eq!(app.state().todos()[0].title, "Buy oat milk");
    assert!(app.state().todos()[0].completed);
}

#[tokio::test]
async fn cancel_discards_edit_without_a_request() {
    let stub = Stub::default();
    let todo = stub.seed("keep", false);
    let mut app = app_with(&stub).await;

    app.execute(Command::Edit(todo.id)).await;
    app.execute(Command::Toggle).await;
    app.execute(Command::Cancel).await;

    assert!(stub.writes().is_empty());
    assert!(app.state().editing().is_none());
    assert_eq!(app.state().todos(), &[todo]);
}

#[tokio::test]
async fn failed_save_keeps_row_and_session() {
    let stub = Stub::default();
    let todo = stub.seed("a", false);
    let mut app = app_with(&stub).await;
    stub.set_fail_writes(true);

    app.execute(Command::Edit(todo.id)).await;
    app.execute(Command::Toggle).await;
    app.execute(Command::Save).await;

    assert_eq!(app.state().todos(), &[todo]);
    assert!(app.state().editing().is_some_and(|s| s.completed));
    assert!(app
        .state()
        .last_error()
        .is_some_and(|e| e.contains("500")));
}

#[tokio::test]
async fn delete_removes_row_only_after_server_confirms() {
    let stub = Stub::default();
    let keep = stub.seed("keep", false);
    let gone = stub.seed("gone", false);
    let mut app = app_with(&stub).await;

    stub.set_fail_writes(true);
    app.execute(Command::Delete(gone.id)).await;
    assert_eq!(app.state().todos().len(), 2);
    assert!(app.state().last_error().is_some());

    stub.set_fail_writes(false);
    app.execute(Command::Delete(gone.id)).await;
    assert_eq!(app.state().todos(), &[keep]);
    assert!(app.state().last_error().is_none());
}

#[tokio::test]
async fn delete_of_unknown_id_surfaces_not_found() {
    let stub = Stub::default();
    let mut app = app_with(&stub).await;

    app.execute(Command::Delete(42)).await;

    assert!(app
        .state()
        .last_error()
        .is_some_and(|e| e.contains("Todo not found")));
}

#[tokio::test]
async fn editing_commands_require_an_open_row() {
    let stub = Stub::default();
    let mut app = app_with(&stub).await;

    app.execute(Command::Toggle).await;
    assert!(app.state().last_error().is_some());

    app.dismiss_error();
    app.execute(Command::Save).await;
    assert!(app.state().last_error().is_some());
    assert!(stub.writes().is_empty());
}

#[tokio::test]
async fn quit_stops_the_loop() {
    let stub = Stub::default();
    let mut app = app_with(&stub).await;
    assert_eq!(app.execute(Command::Quit).await, Flow::Quit);
}
