//! Service layer dispatching user actions to the board reducer.

use crate::board::{
    domain::{
        BoardAction, BoardState, ColumnId, DragResult, IgnoreReason, NewTask, Task, TaskId,
        TaskText, TransitionOutcome,
    },
    ports::{EditPrompt, EditRequest, TaskIdGenerator},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info};

/// Board orchestration service.
///
/// Holds the current [`BoardState`] and replaces it wholesale with the
/// reducer's output on every action, so observers only ever see complete
/// transitions.
pub struct BoardService<G, C>
where
    G: TaskIdGenerator + ?Sized,
    C: Clock + Send + Sync,
{
    state: BoardState,
    id_generator: Arc<G>,
    clock: Arc<C>,
}

impl<G, C> BoardService<G, C>
where
    G: TaskIdGenerator + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a service over an empty board.
    #[must_use]
    pub fn new(id_generator: Arc<G>, clock: Arc<C>) -> Self {
        Self::with_state(BoardState::new(), id_generator, clock)
    }

    /// Creates a service over an existing board state.
    #[must_use]
    pub const fn with_state(state: BoardState, id_generator: Arc<G>, clock: Arc<C>) -> Self {
        Self {
            state,
            id_generator,
            clock,
        }
    }

    /// Returns the current board state.
    #[must_use]
    pub const fn state(&self) -> &BoardState {
        &self.state
    }

    /// Returns the task at `index` in a column.
    #[must_use]
    pub fn task_at(&self, column: ColumnId, index: usize) -> Option<&Task> {
        self.state.columns().task_at(column, index)
    }

    /// Reduces one action against the current state and stores the result.
    pub fn dispatch(&mut self, action: BoardAction) -> TransitionOutcome {
        let name = action.name();
        let transition = self.state.reduce(action);
        match transition.outcome {
            TransitionOutcome::Applied => debug!(action = name, "board action applied"),
            TransitionOutcome::Ignored(reason) => {
                debug!(action = name, %reason, "board action ignored");
            }
        }
        self.state = transition.state;
        transition.outcome
    }

    /// Replaces the pending-input field.
    pub fn set_pending_input(&mut self, text: impl Into<String>) -> TransitionOutcome {
        self.dispatch(BoardAction::SetPendingInput { text: text.into() })
    }

    /// Creates a task from the pending input.
    ///
    /// A blank pending input is ignored before an identifier is minted.
    pub fn add_task(&mut self) -> TransitionOutcome {
        if TaskText::new(self.state.pending_input()).is_err() {
            debug!(action = "add_task", reason = %IgnoreReason::BlankText, "board action ignored");
            return TransitionOutcome::Ignored(IgnoreReason::BlankText);
        }

        let new_task = NewTask {
            id: self.id_generator.next_id(),
            created_at: self.clock.utc(),
        };
        let outcome = self.dispatch(BoardAction::AddTask(new_task));
        if outcome.is_applied() {
            info!(task_id = %new_task.id, "task created");
        }
        outcome
    }

    /// Applies the answer of an edit prompt.
    ///
    /// An absent or blank answer leaves the board unchanged.
    pub fn confirm_edit(
        &mut self,
        column: ColumnId,
        id: TaskId,
        text: Option<String>,
    ) -> TransitionOutcome {
        self.dispatch(BoardAction::ConfirmEdit { column, id, text })
    }

    /// Asks `prompt` for replacement text and applies the answer.
    ///
    /// The prompt is only consulted when the task is present in `column`.
    pub async fn edit_task<P>(&mut self, column: ColumnId, id: TaskId, prompt: &P) -> TransitionOutcome
    where
        P: EditPrompt + ?Sized,
    {
        let Some(request) = self
            .state
            .column(column)
            .iter()
            .find(|task| task.id() == id)
            .map(|task| EditRequest::for_task(column, task))
        else {
            debug!(action = "confirm_edit", reason = %IgnoreReason::TaskNotFound, "board action ignored");
            return TransitionOutcome::Ignored(IgnoreReason::TaskNotFound);
        };

        let text = prompt.request_text(&request).await;
        self.confirm_edit(column, id, text)
    }

    /// Removes a task from a column.
    pub fn delete_task(&mut self, column: ColumnId, id: TaskId) -> TransitionOutcome {
        self.dispatch(BoardAction::DeleteTask { column, id })
    }

    /// Flips a task between To Do and In Progress.
    pub fn toggle_active(&mut self, column: ColumnId, id: TaskId) -> TransitionOutcome {
        self.dispatch(BoardAction::ToggleActive { column, id })
    }

    /// Applies the result of a drag gesture.
    pub fn drag_end(&mut self, result: DragResult) -> TransitionOutcome {
        self.dispatch(BoardAction::DragEnd(result))
    }
}
