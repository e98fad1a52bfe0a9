//! Parsing of REPL input lines into [`Command`]s.

use todo_core::types::DbId;

/// A user command entered at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <title>`: create a todo.
    Add(String),
    /// `edit <id>`: open a row for editing.
    Edit(DbId),
    /// `title <text>`: change the title of the row being edited.
    Title(String),
    /// `toggle`: flip the completion checkbox of the row being edited.
    Toggle,
    /// `save`: send the edit to the server.
    Save,
    /// `cancel`: discard the edit.
    Cancel,
    /// `delete <id>`: remove a todo.
    Delete(DbId),
    /// `list`: reload from the server.
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("'{0}' is not a valid id")]
    InvalidId(String),
}

pub const HELP: &str = "\
commands:
  add <title>     create a todo
  edit <id>       start editing a todo
  title <text>    change the title being edited
  toggle          flip the completed checkbox being edited
  save            save the edit
  cancel          discard the edit
  delete <id>     delete a todo
  list            reload the list
  help            show this help
  quit            exit";

impl std::str::FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ParseError::Empty);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "add" | "a" => text_arg("add", rest).map(Command::Add),
            "edit" | "e" => id_arg("edit", rest).map(Command::Edit),
            "title" | "t" => text_arg("title", rest).map(Command::Title),
            "toggle" | "x" => Ok(Command::Toggle),
            "save" | "s" => Ok(Command::Save),
            "cancel" | "c" => Ok(Command::Cancel),
            "delete" | "del" | "d" => id_arg("delete", rest).map(Command::Delete),
            "list" | "ls" | "refresh" => Ok(Command::Refresh),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

fn text_arg(verb: &'static str, rest: &str) -> Result<String, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::MissingArgument(verb));
    }
    Ok(rest.to_string())
}

fn id_arg(verb: &'static str, rest: &str) -> Result<DbId, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::MissingArgument(verb));
    }
    let raw = rest.trim_start_matches('#');
    raw.parse()
        .map_err(|_| ParseError::InvalidId(rest.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, ParseError> {
        line.parse()
    }

    #[test]
    fn add_keeps_full_title() {
        assert_eq!(
            parse("add   Buy milk and eggs "),
            Ok(Command::Add("Buy milk and eggs".into()))
        );
    }

    #[test]
    fn id_commands_accept_hash_prefix() {
        assert_eq!(parse("edit #12"), Ok(Command::Edit(12)));
        assert_eq!(parse("delete 7"), Ok(Command::Delete(7)));
    }

    #[test]
    fn verbs_are_case_insensitive_with_aliases() {
        assert_eq!(parse("SAVE"), Ok(Command::Save));
        assert_eq!(parse("x"), Ok(Command::Toggle));
        assert_eq!(parse("ls"), Ok(Command::Refresh));
        assert_eq!(parse("q"), Ok(Command::Quit));
    }

    #[test]
    fn missing_and_invalid_arguments() {
        assert_eq!(parse("add"), Err(ParseError::MissingArgument("add")));
        assert_eq!(parse("edit abc"), Err(ParseError::InvalidId("abc".into())));
        assert_eq!(parse("   "), Err(ParseError::Empty));
        assert_eq!(parse("frobnicate"), Err(ParseError::Unknown("frobnicate".into())));
    }
}
