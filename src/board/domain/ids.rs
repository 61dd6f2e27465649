//! Task identifiers for the board.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a board task.
///
/// A task keeps the same identifier in its column and in the audit list,
/// across edits, toggles, and drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Mints a random (v4) identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps a UUID minted elsewhere.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Identifier whose UUID has the integer value `position`.
    ///
    /// ```
    /// use taskboard::board::domain::TaskId;
    ///
    /// assert_eq!(
    ///     TaskId::from_sequence(1).to_string(),
    ///     "00000000-0000-0000-0000-000000000001"
    /// );
    /// ```
    #[must_use]
    pub const fn from_sequence(position: u128) -> Self {
        Self(Uuid::from_u128(position))
    }

    /// Returns the UUID behind this identifier.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
