//! Command execution.
//!
//! [`App`] owns the API client and the state container. Commands that
//! touch the server wait for the reply and then dispatch the matching
//! [`Action`]; failures are dispatched as [`Action::Failed`] and leave the
//! list as it was.

use todo_core::types::{DbId, UserId};
use todo_core::validation;

use crate::api::TodoApi;
use crate::command::Command;
use crate::state::{Action, TodoState};

/// Whether the REPL should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    api: TodoApi,
    user_id: UserId,
    state: TodoState,
}

impl App {
    pub fn new(api: TodoApi, user_id: UserId) -> Self {
        Self {
            api,
            user_id,
            state: TodoState::new(),
        }
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    /// Clear a failure once it has been shown.
    pub fn dismiss_error(&mut self) {
        self.state.apply(Action::DismissError);
    }

    /// Fetch the full list from the server.
    pub async fn load(&mut self) {
        match self.api.list().await {
            Ok(todos) => {
                tracing::debug!(count = todos.len(), "Loaded todos");
                self.state.apply(Action::Loaded(todos));
            }
            Err(e) => self.fail(e.to_string()),
        }
    }

    pub async fn execute(&mut self, command: Command) -> Flow {
        match command {
            Command::Add(title) => self.add(&title).await,
            Command::Edit(id) => {
                if self.state.find(id).is_some() {
                    self.state.apply(Action::StartEdit(id));
                } else {
                    self.fail(format!("no todo with id {id}"));
                }
            }
            Command::Title(title) => {
                if self.require_editing() {
                    self.state.apply(Action::EditTitle(title));
                }
            }
            Command::Toggle => {
                if self.require_editing() {
                    self.state.apply(Action::ToggleCompleted);
                }
            }
            Command::Save => self.save().await,
            Command::Cancel => self.state.apply(Action::CancelEdit),
            Command::Delete(id) => self.delete(id).await,
            Command::Refresh => self.load().await,
            Command::Help => {}
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    async fn add(&mut self, title: &str) {
        if let Err(e) = validation::validate_title(title) {
            self.fail(e.to_string());
            return;
        }
        match self.api.create(self.user_id, title).await {
            Ok(todo) => {
                tracing::debug!(todo_id = todo.id, "Created todo");
                self.state.apply(Action::Created(todo));
            }
            Err(e) => self.fail(e.to_string()),
        }
    }

    async fn save(&mut self) {
        let Some(session) = self.state.editing().cloned() else {
            self.fail("not editing any todo".to_string());
            return;
        };
        if let Err(e) = validation::validate_title(&session.title) {
            self.fail(e.to_string());
            return;
        }
        match self
            .api
            .update(session.id, &session.title, session.completed)
            .await
        {
            Ok(todo) => {
                tracing::debug!(todo_id = todo.id, "Updated todo");
                self.state.apply(Action::Updated(todo));
            }
            Err(e) => self.fail(e.to_string()),
        }
    }

    async fn delete(&mut self, id: DbId) {
        match self.api.delete(id).await {
            Ok(()) => {
                tracing::debug!(todo_id = id, "Deleted todo");
                self.state.apply(Action::Deleted(id));
            }
            Err(e) => self.fail(e.to_string()),
        }
    }

    fn require_editing(&mut self) -> bool {
        if self.state.editing().is_some() {
            return true;
        }
        self.fail("not editing any todo; use 'edit <id>' first".to_string());
        false
    }

    fn fail(&mut self, message: String) {
        self.state.apply(Action::Failed(message));
    }
}
