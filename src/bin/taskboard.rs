//! Interactive terminal front-end for the task board.
//!
//! Usage:
//!
//! ```text
//! taskboard
//! ```
//!
//! Commands are read line by line from standard input and the board is
//! re-rendered on standard output after every change. Logs go to standard
//! error; `RUST_LOG` overrides the filter from `TASKBOARD_LOG`. Type `help`
//! for the command list.

use mockable::DefaultClock;
use std::sync::Arc;
use taskboard::{
    board::{
        adapters::{console::ConsoleSession, view::BoardRenderer},
        services::BoardService,
    },
    config::BoardConfig,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::Builder;
use tokio::sync::Mutex;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn main() -> Result<(), BoxError> {
    let config = BoardConfig::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let runtime = Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(run(config))
}

async fn run(config: BoardConfig) -> Result<(), BoxError> {
    info!(id_strategy = ?config.id_strategy, "starting task board");

    let service = BoardService::new(config.id_strategy.generator(), Arc::new(DefaultClock));
    let renderer = BoardRenderer::new(config.show_audit_list)?;
    let lines = Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()).lines()));
    let output = Arc::new(Mutex::new(tokio::io::stdout()));

    let mut session = ConsoleSession::new(service, renderer, lines, output);
    session.run().await?;

    info!(
        tasks_created = session.service().state().all_tasks().len(),
        "task board closed"
    );
    Ok(())
}
