//! Task identifier generators.

use crate::board::{domain::TaskId, ports::TaskIdGenerator};
use std::sync::atomic::{AtomicU64, Ordering};

/// Generator returning random (v4) UUID identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTaskIdGenerator;

impl TaskIdGenerator for RandomTaskIdGenerator {
    fn next_id(&self) -> TaskId {
        TaskId::new()
    }
}

/// Generator returning identifiers from a monotonic counter.
///
/// Identifiers are UUIDs whose integer value is the counter, starting at 1.
/// Useful where reproducible identifiers matter, such as tests and demos.
#[derive(Debug, Default)]
pub struct SequentialTaskIdGenerator {
    counter: AtomicU64,
}

impl SequentialTaskIdGenerator {
    /// Creates a generator whose first identifier is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// Returns how many identifiers have been handed out.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }
}

impl TaskIdGenerator for SequentialTaskIdGenerator {
    fn next_id(&self) -> TaskId {
        let value = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        TaskId::from_sequence(u128::from(value))
    }
}
