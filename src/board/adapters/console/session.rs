//! Interactive command loop over a board service.

use super::command::{Command, HELP};
use crate::board::{
    adapters::{
        prompt::{LineEditPrompt, SharedLines},
        view::{BoardRenderer, RenderError},
    },
    domain::{ColumnId, DragResult, DraggableLocation, TaskId, TransitionOutcome},
    ports::TaskIdGenerator,
    services::BoardService,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;
use tracing::warn;

const PROMPT: &str = "> ";

/// Errors that end a console session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading input or writing output failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The board could not be rendered.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The board state could not be serialised.
    #[error("failed to serialise board state: {0}")]
    Json(#[from] serde_json::Error),
}

/// Whether the loop should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Line-oriented session driving a [`BoardService`].
pub struct ConsoleSession<G, C, R, W>
where
    G: TaskIdGenerator + ?Sized,
    C: Clock + Send + Sync,
{
    service: BoardService<G, C>,
    renderer: BoardRenderer,
    lines: SharedLines<R>,
    output: Arc<Mutex<W>>,
}

impl<G, C, R, W> ConsoleSession<G, C, R, W>
where
    G: TaskIdGenerator + ?Sized,
    C: Clock + Send + Sync,
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Creates a session reading commands from `lines` and writing to `output`.
    #[must_use]
    pub const fn new(
        service: BoardService<G, C>,
        renderer: BoardRenderer,
        lines: SharedLines<R>,
        output: Arc<Mutex<W>>,
    ) -> Self {
        Self {
            service,
            renderer,
            lines,
            output,
        }
    }

    /// Returns the underlying service.
    #[must_use]
    pub const fn service(&self) -> &BoardService<G, C> {
        &self.service
    }

    /// Runs commands until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError`] when I/O, rendering, or serialisation fails.
    pub async fn run(&mut self) -> Result<(), ConsoleError> {
        self.show().await?;
        loop {
            self.write(PROMPT).await?;
            let next = {
                let mut lines = self.lines.lock().await;
                lines.next_line().await?
            };
            let Some(line) = next else {
                return Ok(());
            };
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Ok(command) => {
                    if self.execute(command).await? == Flow::Quit {
                        return Ok(());
                    }
                }
                Err(error) => {
                    warn!(%error, "rejected console command");
                    self.write_line(&format!("error: {error}")).await?;
                }
            }
        }
    }

    /// Executes a single command.
    ///
    /// Returns `false` once the session should end.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError`] when I/O, rendering, or serialisation fails.
    pub async fn run_command(&mut self, command: Command) -> Result<bool, ConsoleError> {
        Ok(self.execute(command).await? == Flow::Continue)
    }

    async fn execute(&mut self, command: Command) -> Result<Flow, ConsoleError> {
        match command {
            Command::Add(text) => {
                if let Some(value) = text {
                    self.service.set_pending_input(value);
                }
                let outcome = self.service.add_task();
                self.report(outcome).await?;
            }
            Command::Input(text) => {
                let outcome = self.service.set_pending_input(text);
                self.report(outcome).await?;
            }
            Command::Edit(column, index) => {
                if let Some(id) = self.resolve(column, index).await? {
                    let prompt = LineEditPrompt::new(Arc::clone(&self.lines), Arc::clone(&self.output));
                    let outcome = self.service.edit_task(column, id, &prompt).await;
                    self.report(outcome).await?;
                }
            }
            Command::Delete(column, index) => {
                if let Some(id) = self.resolve(column, index).await? {
                    let outcome = self.service.delete_task(column, id);
                    self.report(outcome).await?;
                }
            }
            Command::Toggle(column, index) => {
                if let Some(id) = self.resolve(column, index).await? {
                    let outcome = self.service.toggle_active(column, id);
                    self.report(outcome).await?;
                }
            }
            Command::Drag { from, to } => {
                let source = DraggableLocation::new(from.0, from.1);
                let result = to.map_or_else(
                    || DragResult::cancelled(source),
                    |(column, index)| {
                        DragResult::dropped(source, DraggableLocation::new(column, index))
                    },
                );
                let outcome = self.service.drag_end(result);
                self.report(outcome).await?;
            }
            Command::Show => self.show().await?,
            Command::Json => {
                let json = serde_json::to_string_pretty(self.service.state())?;
                self.write_line(&json).await?;
            }
            Command::Help => self.write_line(HELP).await?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    async fn resolve(
        &mut self,
        column: ColumnId,
        index: usize,
    ) -> Result<Option<TaskId>, ConsoleError> {
        let id = self.service.task_at(column, index).map(|task| task.id());
        if id.is_none() {
            self.write_line(&format!("no task at {column} {index}")).await?;
        }
        Ok(id)
    }

    async fn report(&mut self, outcome: TransitionOutcome) -> Result<(), ConsoleError> {
        match outcome {
            TransitionOutcome::Applied => self.show().await,
            TransitionOutcome::Ignored(reason) => {
                self.write_line(&format!("ignored: {reason}")).await
            }
        }
    }

    async fn show(&mut self) -> Result<(), ConsoleError> {
        let rendered = self.renderer.render(self.service.state())?;
        self.write(&rendered).await
    }

    async fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.write(&format!("{text}\n")).await
    }

    async fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        let mut output = self.output.lock().await;
        output.write_all(text.as_bytes()).await?;
        output.flush().await?;
        Ok(())
    }
}
