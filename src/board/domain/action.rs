//! User actions accepted by the board reducer.

use super::{ColumnId, DragResult, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity and timestamp for a task about to be created.
///
/// Minted by the caller so the reducer stays pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    /// Identifier for the new task.
    pub id: TaskId,
    /// Creation timestamp for the new task.
    pub created_at: DateTime<Utc>,
}

/// One discrete user action on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardAction {
    /// Replaces the contents of the pending-input field.
    SetPendingInput {
        /// New field contents.
        text: String,
    },
    /// Creates a task from the pending input and clears the field.
    AddTask(NewTask),
    /// Confirms an edit with the text returned by the edit prompt.
    ConfirmEdit {
        /// Column holding the task.
        column: ColumnId,
        /// Task to edit.
        id: TaskId,
        /// Replacement text; absent when the prompt was dismissed.
        text: Option<String>,
    },
    /// Removes a task from a column.
    DeleteTask {
        /// Column holding the task.
        column: ColumnId,
        /// Task to delete.
        id: TaskId,
    },
    /// Flips a task between To Do and In Progress.
    ToggleActive {
        /// Column holding the task.
        column: ColumnId,
        /// Task to toggle.
        id: TaskId,
    },
    /// Applies the result of a drag gesture.
    DragEnd(DragResult),
}

impl BoardAction {
    /// Returns a short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetPendingInput { .. } => "set_pending_input",
            Self::AddTask(_) => "add_task",
            Self::ConfirmEdit { .. } => "confirm_edit",
            Self::DeleteTask { .. } => "delete_task",
            Self::ToggleActive { .. } => "toggle_active",
            Self::DragEnd(_) => "drag_end",
        }
    }
}
