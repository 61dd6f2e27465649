//! Port for asking the user for replacement task text.

use crate::board::domain::{ColumnId, Task, TaskId};
use async_trait::async_trait;

/// Context handed to an edit prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    /// Column holding the task being edited.
    pub column: ColumnId,
    /// Identifier of the task being edited.
    pub id: TaskId,
    /// Current task text.
    pub current_text: String,
}

impl EditRequest {
    /// Builds a request describing `task` in `column`.
    #[must_use]
    pub fn for_task(column: ColumnId, task: &Task) -> Self {
        Self {
            column,
            id: task.id(),
            current_text: task.text().as_str().to_owned(),
        }
    }
}

/// Asks the user for the replacement text of a task.
///
/// Implementations resolve to `None` when the user dismisses the prompt.
/// The prompt runs asynchronously so the caller is never blocked while the
/// user decides.
#[async_trait]
pub trait EditPrompt: Send + Sync {
    /// Requests replacement text for the described task.
    async fn request_text(&self, request: &EditRequest) -> Option<String>;
}
