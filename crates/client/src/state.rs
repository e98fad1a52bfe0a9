//! Client-side state container.
//!
//! [`TodoState`] is mutated only through [`TodoState::apply`]. Every
//! change to the list is the result of a server reply (`Loaded`,
//! `Created`, `Updated`, `Deleted`); the edit actions only touch the
//! [`EditSession`], which is sent to the server on save.

use todo_core::types::DbId;

use crate::api::Todo;

/// In-progress edit of a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: DbId,
    pub title: String,
    pub completed: bool,
}

/// How a row is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMode<'a> {
    Viewing,
    Editing(&'a EditSession),
}

/// Everything that can change the client state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the whole list with a fresh server listing.
    Loaded(Vec<Todo>),
    /// A create call succeeded.
    Created(Todo),
    /// An update call succeeded.
    Updated(Todo),
    /// A delete call succeeded.
    Deleted(DbId),
    /// Enter editing mode for a row.
    StartEdit(DbId),
    /// Replace the title in the edit session.
    EditTitle(String),
    /// Flip the completion checkbox in the edit session.
    ToggleCompleted,
    /// Leave editing mode, discarding the session.
    CancelEdit,
    /// Record a failure to show the user.
    Failed(String),
    /// Clear the last failure.
    DismissError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoState {
    todos: Vec<Todo>,
    editing: Option<EditSession>,
    last_error: Option<String>,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn find(&self, id: DbId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn mode_of(&self, id: DbId) -> RowMode<'_> {
        match &self.editing {
            Some(session) if session.id == id => RowMode::Editing(session),
            _ => RowMode::Viewing,
        }
    }

    /// Apply one action. Actions that do not fit the current state
    /// (editing a row that is not open, starting an edit on an unknown id)
    /// leave the state untouched.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Loaded(mut todos) => {
                todos.sort_by_key(|t| t.id);
                let vanished = self
                    .editing
                    .as_ref()
                    .is_some_and(|s| !todos.iter().any(|t| t.id == s.id));
                if vanished {
                    self.editing = None;
                }
                self.todos = todos;
                self.last_error = None;
            }
            Action::Created(todo) => {
                self.upsert(todo);
                self.last_error = None;
            }
            Action::Updated(todo) => {
                if self.editing.as_ref().is_some_and(|s| s.id == todo.id) {
                    self.editing = None;
                }
                self.upsert(todo);
                self.last_error = None;
            }
            Action::Deleted(id) => {
                self.todos.retain(|t| t.id != id);
                if self.editing.as_ref().is_some_and(|s| s.id == id) {
                    self.editing = None;
                }
                self.last_error = None;
            }
            Action::StartEdit(id) => {
                let session = self.find(id).map(|todo| EditSession {
                    id,
                    title: todo.title.clone(),
                    completed: todo.completed,
                });
                if session.is_some() {
                    self.editing = session;
                }
            }
            Action::EditTitle(title) => {
                if let Some(session) = &mut self.editing {
                    session.title = title;
                }
            }
            Action::ToggleCompleted => {
                if let Some(session) = &mut self.editing {
                    session.completed = !session.completed;
                }
            }
            Action::CancelEdit => self.editing = None,
            Action::Failed(message) => self.last_error = Some(message),
            Action::DismissError => self.last_error = None,
        }
    }

    /// Insert or replace a row, keeping the list ordered by id.
    fn upsert(&mut self, todo: Todo) {
        match self.todos.binary_search_by_key(&todo.id, |t| t.id) {
            Ok(pos) => self.todos[pos] = todo,
            Err(pos) => self.todos.insert(pos, todo),
        }
    }
}
