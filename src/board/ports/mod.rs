//! Port contracts for the task board.
//!
//! Ports define the collaborators the board service depends on without
//! committing to a concrete implementation.

pub mod id_generator;
pub mod prompt;

pub use id_generator::TaskIdGenerator;
pub use prompt::{EditPrompt, EditRequest};
