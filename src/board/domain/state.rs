//! Board state container.

use super::{BoardDomainError, ColumnId, Columns, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Complete board state: the columns, the audit list, and the pending input.
///
/// Entries in `all_tasks` mirror text and status changes made in the
/// columns but survive deletion. Deserialising checks that every task's
/// status matches its column, that no task appears twice, and that every
/// task on the board has an audit entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "BoardStateRecord")]
pub struct BoardState {
    pub(super) columns: Columns,
    pub(super) all_tasks: Vec<Task>,
    pub(super) pending_input: String,
}

impl BoardState {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the column mapping.
    #[must_use]
    pub const fn columns(&self) -> &Columns {
        &self.columns
    }

    /// Returns the ordered tasks in a column.
    #[must_use]
    pub fn column(&self, column: ColumnId) -> &[Task] {
        self.columns.get(column)
    }

    /// Returns every task ever created, in creation order.
    #[must_use]
    pub fn all_tasks(&self) -> &[Task] {
        &self.all_tasks
    }

    /// Returns the contents of the pending-input field.
    #[must_use]
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Finds the audit-list entry for a task.
    #[must_use]
    pub fn audit_entry(&self, id: TaskId) -> Option<&Task> {
        self.all_tasks.iter().find(|task| task.id() == id)
    }
}

/// Unchecked wire form of [`BoardState`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoardStateRecord {
    columns: Columns,
    all_tasks: Vec<Task>,
    #[serde(default)]
    pending_input: String,
}

impl TryFrom<BoardStateRecord> for BoardState {
    type Error = BoardDomainError;

    fn try_from(record: BoardStateRecord) -> Result<Self, Self::Error> {
        let mut audited = HashSet::new();
        for task in &record.all_tasks {
            if !audited.insert(task.id()) {
                return Err(BoardDomainError::DuplicateTask(task.id()));
            }
        }

        let mut placed = HashSet::new();
        for (column, tasks) in record.columns.iter() {
            for task in tasks {
                if task.status() != column {
                    return Err(BoardDomainError::StatusMismatch {
                        id: task.id(),
                        column,
                        status: task.status(),
                    });
                }
                if !placed.insert(task.id()) {
                    return Err(BoardDomainError::DuplicateTask(task.id()));
                }
                if !audited.contains(&task.id()) {
                    return Err(BoardDomainError::MissingAuditEntry(task.id()));
                }
            }
        }

        Ok(Self {
            columns: record.columns,
            all_tasks: record.all_tasks,
            pending_input: record.pending_input,
        })
    }
}
