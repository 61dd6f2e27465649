//! Status-to-display lookup.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour of the status dot drawn next to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    /// Colour used for tasks waiting in To Do.
    Red,
    /// Colour used for active tasks.
    Green,
    /// Colour used for completed tasks.
    Yellow,
    /// Fallback colour for unrecognised statuses.
    Gray,
}

impl StatusColor {
    /// Returns the colour name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Gray => "gray",
        }
    }
}

impl fmt::Display for StatusColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display colour and label for a task status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDetails {
    /// Status dot colour.
    pub color: StatusColor,
    /// Human-readable status label; empty for unrecognised statuses.
    pub label: &'static str,
}

/// Looks up the display details for a raw status value.
///
/// Total over all inputs: anything other than `todo`, `inProgress` or
/// `completed` maps to gray with an empty label.
///
/// # Examples
///
/// ```
/// use taskboard::board::domain::{StatusColor, status_details};
///
/// assert_eq!(status_details("inProgress").color, StatusColor::Green);
/// assert_eq!(status_details("archived").label, "");
/// ```
#[must_use]
pub fn status_details(status: &str) -> StatusDetails {
    let (color, label) = match status {
        "todo" => (StatusColor::Red, "To Do"),
        "inProgress" => (StatusColor::Green, "In Progress"),
        "completed" => (StatusColor::Yellow, "Completed"),
        _ => (StatusColor::Gray, ""),
    };
    StatusDetails { color, label }
}
