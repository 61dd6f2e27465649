//! Lifecycle columns and the ordered task sequences they hold.

use super::{ParseColumnIdError, StatusDetails, Task, TaskId, status_details};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one of the three fixed board columns.
///
/// A task's status always equals the identifier of the column holding it, so
/// this type doubles as the task status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnId {
    /// Work not yet started.
    Todo,
    /// Work currently active.
    InProgress,
    /// Finished work.
    Completed,
}

impl ColumnId {
    /// All columns in board display order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Completed];

    /// Returns the canonical string identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inProgress",
            Self::Completed => "completed",
        }
    }

    /// Returns the column heading shown on the board.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Todo => "TO DO",
            Self::InProgress => "IN PROGRESS",
            Self::Completed => "COMPLETED",
        }
    }

    /// Returns the column a toggle sends tasks to.
    ///
    /// `Completed` has no toggle control and yields `None`.
    #[must_use]
    pub const fn toggled(self) -> Option<Self> {
        match self {
            Self::Todo => Some(Self::InProgress),
            Self::InProgress => Some(Self::Todo),
            Self::Completed => None,
        }
    }

    /// Returns the label of the toggle control offered in this column.
    #[must_use]
    pub const fn toggle_label(self) -> Option<&'static str> {
        match self {
            Self::Todo => Some("Activate"),
            Self::InProgress => Some("Deactivate"),
            Self::Completed => None,
        }
    }

    /// Returns the display colour and label for this status.
    #[must_use]
    pub fn details(self) -> StatusDetails {
        status_details(self.as_str())
    }
}

impl TryFrom<&str> for ColumnId {
    type Error = ParseColumnIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "todo" => Ok(Self::Todo),
            "inProgress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseColumnIdError(value.to_owned())),
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from each column to its ordered task sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Columns {
    todo: Vec<Task>,
    in_progress: Vec<Task>,
    completed: Vec<Task>,
}

impl Columns {
    /// Creates three empty columns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ordered tasks in a column.
    #[must_use]
    pub fn get(&self, column: ColumnId) -> &[Task] {
        match column {
            ColumnId::Todo => &self.todo,
            ColumnId::InProgress => &self.in_progress,
            ColumnId::Completed => &self.completed,
        }
    }

    pub(super) const fn get_mut(&mut self, column: ColumnId) -> &mut Vec<Task> {
        match column {
            ColumnId::Todo => &mut self.todo,
            ColumnId::InProgress => &mut self.in_progress,
            ColumnId::Completed => &mut self.completed,
        }
    }

    /// Returns the position of a task within a column.
    #[must_use]
    pub fn position_of(&self, column: ColumnId, id: TaskId) -> Option<usize> {
        self.get(column).iter().position(|task| task.id() == id)
    }

    /// Returns the task at `index` in a column.
    #[must_use]
    pub fn task_at(&self, column: ColumnId, index: usize) -> Option<&Task> {
        self.get(column).get(index)
    }

    /// Finds the column currently holding a task.
    #[must_use]
    pub fn locate(&self, id: TaskId) -> Option<ColumnId> {
        ColumnId::ALL
            .into_iter()
            .find(|column| self.position_of(*column, id).is_some())
    }

    /// Iterates over the columns in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ColumnId, &[Task])> {
        ColumnId::ALL
            .into_iter()
            .map(move |column| (column, self.get(column)))
    }

    /// Returns the number of tasks across all columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.completed.len()
    }

    /// Returns `true` when no column holds a task.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
