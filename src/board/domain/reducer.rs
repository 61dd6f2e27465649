//! Pure state-transition function for the board.
//!
//! Every user action is a case of [`BoardState::reduce`]. A reduction never
//! mutates its input; it returns the successor state together with an outcome
//! describing whether the action took effect. Actions that cannot apply are
//! silent no-ops: the returned state equals the input.

use super::{BoardAction, BoardState, ColumnId, DragResult, NewTask, Task, TaskId, TaskText};
use serde::Serialize;
use std::fmt;

/// Reason an action left the board unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The supplied text was absent or blank after trimming.
    BlankText,
    /// No task with the given identifier was found where expected.
    TaskNotFound,
    /// The column offers no toggle control.
    NotToggleable,
    /// The drag ended outside every column.
    MissingDestination,
    /// The drag ended where it started.
    SamePosition,
    /// The drag source index does not address a task.
    IndexOutOfRange,
}

impl IgnoreReason {
    /// Returns a short description for logging.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BlankText => "blank text",
            Self::TaskNotFound => "task not found",
            Self::NotToggleable => "column has no toggle",
            Self::MissingDestination => "dropped outside the board",
            Self::SamePosition => "dropped at its source position",
            Self::IndexOutOfRange => "source index out of range",
        }
    }
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a reduction changed the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum TransitionOutcome {
    /// The action was applied.
    Applied,
    /// The action was ignored and the state is unchanged.
    Ignored(IgnoreReason),
}

impl TransitionOutcome {
    /// Returns `true` when the action was applied.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Result of reducing one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Successor state.
    pub state: BoardState,
    /// Whether the action took effect.
    pub outcome: TransitionOutcome,
}

impl Transition {
    const fn applied(state: BoardState) -> Self {
        Self {
            state,
            outcome: TransitionOutcome::Applied,
        }
    }

    fn ignored(state: &BoardState, reason: IgnoreReason) -> Self {
        Self {
            state: state.clone(),
            outcome: TransitionOutcome::Ignored(reason),
        }
    }
}

impl BoardState {
    /// Applies one action and returns the successor state.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard::board::domain::{BoardAction, BoardState, ColumnId, NewTask, TaskId};
    ///
    /// let state = BoardState::new()
    ///     .reduce(BoardAction::SetPendingInput { text: "Buy milk".to_owned() })
    ///     .state;
    /// let new_task = NewTask { id: TaskId::new(), created_at: chrono::Utc::now() };
    /// let transition = state.reduce(BoardAction::AddTask(new_task));
    ///
    /// assert!(transition.outcome.is_applied());
    /// assert_eq!(transition.state.column(ColumnId::Todo).len(), 1);
    /// assert_eq!(transition.state.pending_input(), "");
    /// ```
    #[must_use]
    pub fn reduce(&self, action: BoardAction) -> Transition {
        match action {
            BoardAction::SetPendingInput { text } => self.set_pending_input(text),
            BoardAction::AddTask(new_task) => self.add_task(new_task),
            BoardAction::ConfirmEdit { column, id, text } => self.confirm_edit(column, id, text),
            BoardAction::DeleteTask { column, id } => self.delete_task(column, id),
            BoardAction::ToggleActive { column, id } => self.toggle_active(column, id),
            BoardAction::DragEnd(result) => self.drag_end(result),
        }
    }

    fn set_pending_input(&self, text: String) -> Transition {
        Transition::applied(Self {
            pending_input: text,
            ..self.clone()
        })
    }

    fn add_task(&self, new_task: NewTask) -> Transition {
        let Ok(text) = TaskText::new(self.pending_input.clone()) else {
            return Transition::ignored(self, IgnoreReason::BlankText);
        };
        let task = Task::new(new_task.id, text, new_task.created_at);

        let mut next = self.clone();
        next.columns.get_mut(ColumnId::Todo).push(task.clone());
        next.all_tasks.push(task);
        next.pending_input.clear();
        Transition::applied(next)
    }

    fn confirm_edit(&self, column: ColumnId, id: TaskId, text: Option<String>) -> Transition {
        let Some(new_text) = text.and_then(|raw| TaskText::new(raw).ok()) else {
            return Transition::ignored(self, IgnoreReason::BlankText);
        };

        let mut next = self.clone();
        let in_column = replace_where(next.columns.get_mut(column), id, |task| {
            task.with_text(new_text.clone())
        });
        let in_audit = replace_where(&mut next.all_tasks, id, |task| {
            task.with_text(new_text.clone())
        });

        if in_column || in_audit {
            Transition::applied(next)
        } else {
            Transition::ignored(self, IgnoreReason::TaskNotFound)
        }
    }

    fn delete_task(&self, column: ColumnId, id: TaskId) -> Transition {
        let Some(position) = self.columns.position_of(column, id) else {
            return Transition::ignored(self, IgnoreReason::TaskNotFound);
        };

        let mut next = self.clone();
        next.columns.get_mut(column).remove(position);
        Transition::applied(next)
    }

    fn toggle_active(&self, column: ColumnId, id: TaskId) -> Transition {
        let Some(position) = self.columns.position_of(column, id) else {
            return Transition::ignored(self, IgnoreReason::TaskNotFound);
        };
        let Some(target) = column.toggled() else {
            return Transition::ignored(self, IgnoreReason::NotToggleable);
        };

        let mut next = self.clone();
        let task = next.columns.get_mut(column).remove(position);
        next.columns.get_mut(target).push(task.with_status(target));
        // The audit entry flips on its own status, so a stray completed entry stays put.
        replace_where(&mut next.all_tasks, id, |entry| {
            entry.with_status(entry.status().toggled().unwrap_or(entry.status()))
        });
        Transition::applied(next)
    }

    fn drag_end(&self, result: DragResult) -> Transition {
        let DragResult {
            source,
            destination,
        } = result;
        let Some(landing) = destination else {
            return Transition::ignored(self, IgnoreReason::MissingDestination);
        };
        if source == landing {
            return Transition::ignored(self, IgnoreReason::SamePosition);
        }
        if source.index >= self.columns.get(source.column).len() {
            return Transition::ignored(self, IgnoreReason::IndexOutOfRange);
        }

        let mut next = self.clone();
        let moved = next.columns.get_mut(source.column).remove(source.index);
        let id = moved.id();
        let target = next.columns.get_mut(landing.column);
        let insert_at = landing.index.min(target.len());
        target.insert(insert_at, moved.with_status(landing.column));
        replace_where(&mut next.all_tasks, id, |entry| {
            entry.with_status(landing.column)
        });
        Transition::applied(next)
    }
}

/// Replaces every task matching `id` with `update(task)`.
///
/// Returns `true` when at least one task matched.
fn replace_where(tasks: &mut [Task], id: TaskId, update: impl Fn(&Task) -> Task) -> bool {
    let mut matched = false;
    for task in tasks.iter_mut().filter(|task| task.id() == id) {
        *task = update(task);
        matched = true;
    }
    matched
}
