//! Line-oriented terminal front-end.
//!
//! Commands address tasks by column and index, as a user reads them off the
//! rendered board; the session resolves those positions to task identifiers
//! before handing the action to the [`BoardService`].
//!
//! [`BoardService`]: crate::board::services::BoardService

mod command;
mod session;

pub use command::{Command, CommandParseError, HELP, parse_column};
pub use session::{ConsoleError, ConsoleSession};
