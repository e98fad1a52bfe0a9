//! Text rendering of the client state.

use crate::api::Todo;
use crate::state::{RowMode, TodoState};

const STRIKE_ON: &str = "\x1b[9m";
const STRIKE_OFF: &str = "\x1b[29m";

/// Render the whole state as terminal text.
///
/// Completed titles are wrapped in the ANSI strikethrough sequence. The row
/// being edited shows the session's title and checkbox, not the stored ones.
pub fn render(state: &TodoState) -> String {
    let mut out = String::from("Todos\n");

    if state.todos().is_empty() {
        out.push_str("  (no todos)\n");
    }

    for todo in state.todos() {
        out.push_str(&render_row(todo, state.mode_of(todo.id)));
        out.push('\n');
    }

    if let Some(error) = state.last_error() {
        out.push_str(&format!("! {error}\n"));
    }

    out
}

fn render_row(todo: &Todo, mode: RowMode<'_>) -> String {
    match mode {
        RowMode::Viewing => {
            let title = if todo.completed {
                format!("{STRIKE_ON}{}{STRIKE_OFF}", todo.title)
            } else {
                todo.title.clone()
            };
            format!("  #{:<4} {title}", todo.id)
        }
        RowMode::Editing(session) => format!(
            "> #{:<4} [{}] {}   (title <text> | toggle | save | cancel)",
            todo.id,
            if session.completed { "x" } else { " " },
            session.title,
        ),
    }
}
