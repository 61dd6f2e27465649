//! Taskboard: a kanban-style task board.
//!
//! Users add free-text tasks which move across three lifecycle columns
//! (To Do, In Progress, Completed) by toggling or drag-and-drop, and every
//! task ever created stays visible in a flat audit list.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure state and a single reducer with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for identifiers and edit prompts
//! - **Adapters**: Concrete implementations of ports and the terminal edge
//!
//! # Modules
//!
//! - [`board`]: Board state, reducer, and orchestration
//! - [`config`]: Runtime configuration for the front-end

pub mod board;
pub mod config;
