//! Kanban board state management.
//!
//! A board tracks free-text tasks across three lifecycle columns (To Do,
//! In Progress, Completed) alongside an append-only audit list of every task
//! ever created. All state changes flow through a single pure reducer so the
//! columns and the audit list can never be observed out of step. The module
//! follows hexagonal architecture:
//!
//! - Domain types and the reducer in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
