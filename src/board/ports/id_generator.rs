//! Port for minting task identifiers.

use crate::board::domain::TaskId;

/// Source of fresh, unique task identifiers.
pub trait TaskIdGenerator: Send + Sync {
    /// Returns an identifier never handed out before by this generator.
    fn next_id(&self) -> TaskId;
}
