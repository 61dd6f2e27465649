//! Parser for console commands.

use crate::board::domain::{ColumnId, ParseColumnIdError};
use thiserror::Error;

/// Help text listing the console commands.
pub const HELP: &str = "\
commands:
  add [text]                          add a task (uses the pending input when text is omitted)
  input <text>                        set the pending input without adding
  edit <column> <index>               edit a task's text
  delete <column> <index>             delete a task
  toggle <column> <index>             activate or deactivate a task
  drag <column> <index> <column> <index>
  drag <column> <index> -             drag a task (\"-\" drops it outside the board)
  show                                render the board
  json                                print the board state as JSON
  help                                show this help
  quit                                leave
columns: todo, inProgress, completed";

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Adds a task, optionally replacing the pending input first.
    Add(Option<String>),
    /// Replaces the pending input.
    Input(String),
    /// Edits the task at a position.
    Edit(ColumnId, usize),
    /// Deletes the task at a position.
    Delete(ColumnId, usize),
    /// Toggles the task at a position.
    Toggle(ColumnId, usize),
    /// Drags a task from one position to another, or off the board.
    Drag {
        /// Source position.
        from: (ColumnId, usize),
        /// Drop position; `None` when dropped outside the board.
        to: Option<(ColumnId, usize)>,
    },
    /// Renders the board.
    Show,
    /// Prints the state as JSON.
    Json,
    /// Prints the command list.
    Help,
    /// Ends the session.
    Quit,
}

/// Errors returned while parsing a console command.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandParseError {
    /// The line held no command.
    #[error("empty command")]
    Empty,

    /// The command word is not recognised.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A required argument is missing.
    #[error("{command}: missing {argument}")]
    MissingArgument {
        /// Command being parsed.
        command: &'static str,
        /// Name of the missing argument.
        argument: &'static str,
    },

    /// The command received more arguments than it accepts.
    #[error("{command}: unexpected argument '{argument}'")]
    UnexpectedArgument {
        /// Command being parsed.
        command: &'static str,
        /// First surplus argument.
        argument: String,
    },

    /// An index argument is not a non-negative integer.
    #[error("invalid index '{0}', expected a non-negative integer")]
    InvalidIndex(String),

    /// A column argument is not a known column.
    #[error(transparent)]
    InvalidColumn(#[from] ParseColumnIdError),
}

impl Command {
    /// Parses one input line.
    ///
    /// # Errors
    ///
    /// Returns [`CommandParseError`] when the line is empty, names an unknown
    /// command, or carries missing or malformed arguments.
    pub fn parse(line: &str) -> Result<Self, CommandParseError> {
        let trimmed = line.trim();
        let (word, rest) = trimmed
            .split_once(char::is_whitespace)
            .map_or((trimmed, ""), |(word, rest)| (word, rest.trim()));

        match word.to_ascii_lowercase().as_str() {
            "" => Err(CommandParseError::Empty),
            "add" => Ok(Self::Add((!rest.is_empty()).then(|| rest.to_owned()))),
            "input" => Ok(Self::Input(rest.to_owned())),
            "edit" => parse_position("edit", rest).map(|(column, index)| Self::Edit(column, index)),
            "delete" | "rm" => {
                parse_position("delete", rest).map(|(column, index)| Self::Delete(column, index))
            }
            "toggle" => {
                parse_position("toggle", rest).map(|(column, index)| Self::Toggle(column, index))
            }
            "drag" | "mv" => parse_drag(rest),
            "show" | "ls" => no_arguments("show", rest, Self::Show),
            "json" => no_arguments("json", rest, Self::Json),
            "help" | "?" => no_arguments("help", rest, Self::Help),
            "quit" | "exit" => no_arguments("quit", rest, Self::Quit),
            _ => Err(CommandParseError::UnknownCommand(word.to_owned())),
        }
    }
}

/// Parses a column name, accepting case-insensitive spellings.
///
/// # Errors
///
/// Returns [`ParseColumnIdError`] when the name matches no column.
pub fn parse_column(value: &str) -> Result<ColumnId, ParseColumnIdError> {
    match value.to_ascii_lowercase().as_str() {
        "todo" => Ok(ColumnId::Todo),
        "inprogress" | "in-progress" | "in_progress" => Ok(ColumnId::InProgress),
        "completed" => Ok(ColumnId::Completed),
        _ => ColumnId::try_from(value),
    }
}

fn parse_index(value: &str) -> Result<usize, CommandParseError> {
    value
        .parse()
        .map_err(|_| CommandParseError::InvalidIndex(value.to_owned()))
}

fn next_position<'a>(
    command: &'static str,
    args: &mut impl Iterator<Item = &'a str>,
) -> Result<(ColumnId, usize), CommandParseError> {
    let column = args.next().ok_or(CommandParseError::MissingArgument {
        command,
        argument: "column",
    })?;
    let index = args.next().ok_or(CommandParseError::MissingArgument {
        command,
        argument: "index",
    })?;
    Ok((parse_column(column)?, parse_index(index)?))
}

fn ensure_exhausted<'a>(
    command: &'static str,
    args: &mut impl Iterator<Item = &'a str>,
) -> Result<(), CommandParseError> {
    args.next().map_or(Ok(()), |extra| {
        Err(CommandParseError::UnexpectedArgument {
            command,
            argument: extra.to_owned(),
        })
    })
}

fn parse_position(command: &'static str, rest: &str) -> Result<(ColumnId, usize), CommandParseError> {
    let mut args = rest.split_whitespace();
    let position = next_position(command, &mut args)?;
    ensure_exhausted(command, &mut args)?;
    Ok(position)
}

fn parse_drag(rest: &str) -> Result<Command, CommandParseError> {
    let mut args = rest.split_whitespace().peekable();
    let from = next_position("drag", &mut args)?;
    let to = match args.peek() {
        None => {
            return Err(CommandParseError::MissingArgument {
                command: "drag",
                argument: "destination",
            });
        }
        Some(&"-") => {
            args.next();
            None
        }
        Some(_) => Some(next_position("drag", &mut args)?),
    };
    ensure_exhausted("drag", &mut args)?;
    Ok(Command::Drag { from, to })
}

fn no_arguments(
    command: &'static str,
    rest: &str,
    parsed: Command,
) -> Result<Command, CommandParseError> {
    ensure_exhausted(command, &mut rest.split_whitespace())?;
    Ok(parsed)
}
