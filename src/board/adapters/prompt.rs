//! Edit prompt implementations.

use crate::board::ports::{EditPrompt, EditRequest};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex as StdMutex};
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt, Lines};
use tokio::sync::Mutex;

/// Line stream shared between a command loop and a [`LineEditPrompt`].
pub type SharedLines<R> = Arc<Mutex<Lines<R>>>;

/// Prompt that replays a fixed queue of answers.
///
/// Each request consumes the next answer; once the queue is exhausted every
/// request resolves to `None`, as if the user dismissed the prompt.
#[derive(Debug, Default)]
pub struct ScriptedEditPrompt {
    answers: StdMutex<VecDeque<Option<String>>>,
    asked: StdMutex<Vec<EditRequest>>,
}

impl ScriptedEditPrompt {
    /// Creates a prompt that answers with `answers` in order.
    #[must_use]
    pub fn new(answers: impl IntoIterator<Item = Option<String>>) -> Self {
        Self {
            answers: StdMutex::new(answers.into_iter().collect()),
            asked: StdMutex::new(Vec::new()),
        }
    }

    /// Creates a prompt that answers once with `text`.
    #[must_use]
    pub fn answering(text: impl Into<String>) -> Self {
        Self::new([Some(text.into())])
    }

    /// Creates a prompt the user always dismisses.
    #[must_use]
    pub fn dismissed() -> Self {
        Self::default()
    }

    /// Returns the requests received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<EditRequest> {
        self.asked
            .lock()
            .map(|asked| asked.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl EditPrompt for ScriptedEditPrompt {
    async fn request_text(&self, request: &EditRequest) -> Option<String> {
        if let Ok(mut asked) = self.asked.lock() {
            asked.push(request.clone());
        }
        self.answers
            .lock()
            .ok()
            .and_then(|mut answers| answers.pop_front())
            .flatten()
    }
}

/// Prompt that writes a question and reads the answer from a line stream.
///
/// End of input resolves to `None`.
pub struct LineEditPrompt<R, W> {
    lines: SharedLines<R>,
    output: Arc<Mutex<W>>,
}

impl<R, W> LineEditPrompt<R, W> {
    /// Creates a prompt over a shared line stream and output sink.
    #[must_use]
    pub const fn new(lines: SharedLines<R>, output: Arc<Mutex<W>>) -> Self {
        Self { lines, output }
    }
}

#[async_trait]
impl<R, W> EditPrompt for LineEditPrompt<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn request_text(&self, request: &EditRequest) -> Option<String> {
        let question = format!("Edit your task [{}]: ", request.current_text);
        {
            let mut output = self.output.lock().await;
            if output.write_all(question.as_bytes()).await.is_err()
                || output.flush().await.is_err()
            {
                return None;
            }
        }
        let mut lines = self.lines.lock().await;
        lines.next_line().await.ok().flatten()
    }
}
