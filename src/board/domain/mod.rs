//! Domain model for the task board.
//!
//! The board domain owns the task, column, and audit-list types together with
//! the reducer that applies user actions to them. Nothing in here performs
//! I/O; identifiers and timestamps are supplied by the caller.

mod action;
mod column;
mod drag;
mod error;
mod ids;
mod reducer;
mod state;
mod status;
mod task;

pub use action::{BoardAction, NewTask};
pub use column::{ColumnId, Columns};
pub use drag::{DragResult, DraggableLocation};
pub use error::{BoardDomainError, ParseColumnIdError};
pub use ids::TaskId;
pub use reducer::{IgnoreReason, Transition, TransitionOutcome};
pub use state::BoardState;
pub use status::{StatusColor, StatusDetails, status_details};
pub use task::{Task, TaskText};
