//! Unit tests for the board module.
//!
//! Tests are organised by layer: domain values, the reducer, the status
//! lookup, the service, and the console and view adapters.

mod reducer_tests;
