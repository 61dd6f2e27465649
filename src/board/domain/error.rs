//! Error types for board domain validation and parsing.

use super::{ColumnId, TaskId};
use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task text is empty after trimming.
    #[error("task text must not be empty")]
    EmptyTaskText,

    /// A task sits in a column that disagrees with its status.
    #[error("task {id} is in the {column} column but has status {status}")]
    StatusMismatch {
        /// Task carrying the stale status.
        id: TaskId,
        /// Column holding the task.
        column: ColumnId,
        /// Status recorded on the task.
        status: ColumnId,
    },

    /// A task appears more than once across the columns or the audit list.
    #[error("task {0} appears more than once")]
    DuplicateTask(TaskId),

    /// A task on the board has no audit-list entry.
    #[error("task {0} is missing from the audit list")]
    MissingAuditEntry(TaskId),
}

/// Error returned while parsing column identifiers from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown column: {0}")]
pub struct ParseColumnIdError(pub String);
