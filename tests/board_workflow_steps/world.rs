//! Shared world state for task board BDD scenarios.

use std::sync::Arc;

use eyre::eyre;
use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::ids::SequentialTaskIdGenerator,
    domain::{BoardState, ColumnId, TaskId},
    services::BoardService,
};

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<SequentialTaskIdGenerator, DefaultClock>;

/// Scenario world for board workflow tests.
pub struct BoardWorld {
    pub service: TestBoardService,
    pub before: Option<BoardState>,
}

impl BoardWorld {
    /// Creates a world around an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: BoardService::new(
                Arc::new(SequentialTaskIdGenerator::new()),
                Arc::new(DefaultClock),
            ),
            before: None,
        }
    }

    /// Snapshots the board before the action under test.
    pub fn remember(&mut self) {
        self.before = Some(self.service.state().clone());
    }

    /// Resolves a column position to the task identifier shown there.
    pub fn task_id_at(&self, column: ColumnId, index: usize) -> Result<TaskId, eyre::Report> {
        self.service
            .task_at(column, index)
            .map(|task| task.id())
            .ok_or_else(|| eyre!("no task at {column} {index}"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Parses a column name used in a scenario.
pub fn column(name: &str) -> Result<ColumnId, eyre::Report> {
    ColumnId::try_from(name).map_err(|err| eyre!("invalid column in scenario: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
