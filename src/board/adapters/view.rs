//! Text rendering of the board through a `minijinja` template.

use crate::board::domain::{BoardState, ColumnId, Task};
use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

const TEMPLATE_NAME: &str = "board";

const BOARD_TEMPLATE: &str = "\
SCHEDULE BOARD
{% if pending_input %}
pending: {{ pending_input }}
{% endif %}
{% if show_audit_list %}

ALL TASKS
{% for task in all_tasks %}
  ({{ task.color }}) {{ task.text }} - {{ task.label }}
{% else %}
  No tasks added yet.
{% endfor %}
{% endif %}
{% for column in columns %}

{{ column.title }}
{% for task in column.tasks %}
  {{ loop.index0 }}. ({{ task.color }}) {{ task.text }}{% if task.completed %} (Completed){% endif %}{% if column.toggle_label %} [{{ column.toggle_label }}]{% endif %}

{% endfor %}
{% endfor %}
";

/// Errors returned while rendering the board.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The board template failed to compile.
    #[error("invalid board template: {0}")]
    Template(String),

    /// Rendering the template failed.
    #[error("failed to render board: {0}")]
    Render(String),
}

#[derive(Debug, Serialize)]
struct TaskView<'a> {
    text: &'a str,
    color: &'static str,
    label: &'static str,
    completed: bool,
}

impl<'a> TaskView<'a> {
    fn from_task(task: &'a Task) -> Self {
        let details = task.status().details();
        Self {
            text: task.text().as_str(),
            color: details.color.as_str(),
            label: details.label,
            completed: task.status() == ColumnId::Completed,
        }
    }
}

#[derive(Debug, Serialize)]
struct ColumnView<'a> {
    title: &'static str,
    toggle_label: Option<&'static str>,
    tasks: Vec<TaskView<'a>>,
}

#[derive(Debug, Serialize)]
struct BoardView<'a> {
    pending_input: &'a str,
    show_audit_list: bool,
    all_tasks: Vec<TaskView<'a>>,
    columns: Vec<ColumnView<'a>>,
}

/// Renders board state as plain text.
#[derive(Debug)]
pub struct BoardRenderer {
    environment: Environment<'static>,
    show_audit_list: bool,
}

impl BoardRenderer {
    /// Creates a renderer.
    ///
    /// `show_audit_list` controls whether the ALL TASKS section is drawn.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when the board template fails to
    /// compile.
    pub fn new(show_audit_list: bool) -> Result<Self, RenderError> {
        let mut environment = Environment::new();
        environment.set_trim_blocks(true);
        environment.set_lstrip_blocks(true);
        environment
            .add_template(TEMPLATE_NAME, BOARD_TEMPLATE)
            .map_err(|error| RenderError::Template(error.to_string()))?;
        Ok(Self {
            environment,
            show_audit_list,
        })
    }

    /// Renders the board.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Render`] when template evaluation fails.
    pub fn render(&self, state: &BoardState) -> Result<String, RenderError> {
        let view = BoardView {
            pending_input: state.pending_input(),
            show_audit_list: self.show_audit_list,
            all_tasks: state.all_tasks().iter().map(TaskView::from_task).collect(),
            columns: state
                .columns()
                .iter()
                .map(|(column, tasks)| ColumnView {
                    title: column.title(),
                    toggle_label: column.toggle_label(),
                    tasks: tasks.iter().map(TaskView::from_task).collect(),
                })
                .collect(),
        };

        self.environment
            .get_template(TEMPLATE_NAME)
            .and_then(|template| template.render(&view))
            .map_err(|error| RenderError::Render(error.to_string()))
    }
}
