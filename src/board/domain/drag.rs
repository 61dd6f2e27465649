//! Drag-and-drop gesture results.

use super::ColumnId;
use serde::{Deserialize, Serialize};

/// A position on the board: a column and an index within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraggableLocation {
    /// Column holding the position.
    pub column: ColumnId,
    /// Zero-based index within the column.
    pub index: usize,
}

impl DraggableLocation {
    /// Creates a board location.
    #[must_use]
    pub const fn new(column: ColumnId, index: usize) -> Self {
        Self { column, index }
    }
}

/// Outcome of a drag gesture.
///
/// `destination` is absent when the task was dropped outside any column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragResult {
    /// Where the dragged task started.
    pub source: DraggableLocation,
    /// Where the dragged task was dropped, if anywhere.
    pub destination: Option<DraggableLocation>,
}

impl DragResult {
    /// Creates a drag result that landed on a column.
    #[must_use]
    pub const fn dropped(source: DraggableLocation, destination: DraggableLocation) -> Self {
        Self {
            source,
            destination: Some(destination),
        }
    }

    /// Creates a drag result that was dropped outside every column.
    #[must_use]
    pub const fn cancelled(source: DraggableLocation) -> Self {
        Self {
            source,
            destination: None,
        }
    }
}
