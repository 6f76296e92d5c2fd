//! Serializable view models.

use crate::board::domain::{ColumnId, Workspace};
use crate::project::domain::{Project, ProjectId};
use crate::task::domain::{Task, TaskField, TaskId};
use mockable::Clock;
use serde::Serialize;

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Everything needed to draw the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// Project list for the sidebar.
    pub projects: Vec<ProjectListItem>,
    /// Header of the selected project.
    pub project: Option<ProjectHeader>,
    /// Columns left to right.
    pub columns: Vec<ColumnView>,
    /// Detail panel of the selected task.
    pub selected_task: Option<TaskDetailView>,
    /// The add-task form, when open.
    pub create_form: Option<CreateFormView>,
    /// Task being dragged.
    pub dragging: Option<TaskId>,
}

/// Sidebar entry for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectListItem {
    /// Project id.
    pub id: ProjectId,
    /// Name.
    pub name: String,
    /// Status label.
    pub status: &'static str,
    /// Badge colour.
    pub badge_color: &'static str,
    /// Number of tasks not done.
    pub incomplete_count: usize,
    /// Whether this is the selected project.
    pub selected: bool,
}

/// Header of the selected project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectHeader {
    /// Project id.
    pub id: ProjectId,
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Status label.
    pub status: &'static str,
    /// Badge colour.
    pub badge_color: &'static str,
    /// Number of tasks not done.
    pub incomplete_count: usize,
}

/// One board column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    /// Column id.
    pub id: ColumnId,
    /// Element id, e.g. `column-done`.
    pub element_id: String,
    /// Display title.
    pub title: &'static str,
    /// Cards top to bottom.
    pub cards: Vec<CardView>,
}

/// One task card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    /// Task id.
    pub id: TaskId,
    /// Element id, e.g. `task-<uuid>`.
    pub element_id: String,
    /// Title.
    pub title: String,
    /// Assignee name.
    pub assignee: String,
    /// Assignee avatar.
    pub avatar_url: Option<String>,
    /// Priority.
    pub priority: &'static str,
    /// Due date as `YYYY-MM-DD`.
    pub due_date: String,
    /// Whether the card is the selected task.
    pub selected: bool,
}

/// Detail panel of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDetailView {
    /// Task id.
    pub id: TaskId,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Assignee name.
    pub assignee: String,
    /// Status label.
    pub status: &'static str,
    /// Priority.
    pub priority: &'static str,
    /// Due date as `YYYY-MM-DD`.
    pub due_date: String,
}

/// State of the add-task form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateFormView {
    /// Fields that failed the last submission.
    pub missing: Vec<TaskField>,
    /// Non-field error of the last submission.
    pub error: Option<String>,
}

impl BoardView {
    pub(super) fn from_workspace<C: Clock>(
        workspace: &Workspace<C>,
        create_form: Option<CreateFormView>,
        dragging: Option<TaskId>,
    ) -> Self {
        let registry = workspace.projects();
        let store = workspace.store();
        let selected = registry.selected();
        let selected_task_id = store.selected_id();

        let projects = registry
            .iter()
            .map(|project| ProjectListItem {
                id: project.id(),
                name: project.name().to_owned(),
                status: project.status().label(),
                badge_color: project.status().badge_color(),
                incomplete_count: workspace.incomplete_task_count(project.id()),
                selected: selected.is_some_and(|current| current.id() == project.id()),
            })
            .collect();

        let columns = ColumnId::ALL
            .into_iter()
            .map(|column| ColumnView {
                id: column,
                element_id: column.element_id(),
                title: column.title(),
                cards: selected.map_or_else(Vec::new, |project| {
                    store
                        .tasks_in(column, project.id())
                        .map(|task| card(task, selected_task_id))
                        .collect()
                }),
            })
            .collect();

        Self {
            projects,
            project: selected.map(|project| header(workspace, project)),
            columns,
            selected_task: store.selected_task().map(detail),
            create_form,
            dragging,
        }
    }

    /// Iterates over every card, column by column.
    pub fn cards(&self) -> impl Iterator<Item = &CardView> {
        self.columns.iter().flat_map(|column| column.cards.iter())
    }
}

fn header<C: Clock>(workspace: &Workspace<C>, project: &Project) -> ProjectHeader {
    ProjectHeader {
        id: project.id(),
        name: project.name().to_owned(),
        description: project.description().to_owned(),
        status: project.status().label(),
        badge_color: project.status().badge_color(),
        incomplete_count: workspace.incomplete_task_count(project.id()),
    }
}

fn card(task: &Task, selected: Option<TaskId>) -> CardView {
    CardView {
        id: task.id(),
        element_id: task.id().element_id(),
        title: task.title().to_owned(),
        assignee: task.assignee().name().to_owned(),
        avatar_url: task.assignee().avatar_url().map(str::to_owned),
        priority: task.priority().as_str(),
        due_date: task.due_date().format(DUE_DATE_FORMAT).to_string(),
        selected: selected == Some(task.id()),
    }
}

fn detail(task: &Task) -> TaskDetailView {
    TaskDetailView {
        id: task.id(),
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        assignee: task.assignee().name().to_owned(),
        status: task.status().label(),
        priority: task.priority().as_str(),
        due_date: task.due_date().format(DUE_DATE_FORMAT).to_string(),
    }
}
