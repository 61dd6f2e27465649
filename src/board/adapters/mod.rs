//! Adapter implementations for board ports and edges.
//!
//! - [`ids`]: task identifier generators
//! - [`prompt`]: edit prompt implementations
//! - [`console`]: line-oriented command parsing for the terminal front-end
//! - [`view`]: template-based board rendering

pub mod console;
pub mod ids;
pub mod prompt;
pub mod view;
