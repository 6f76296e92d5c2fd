//! Shared builders for board tests.

use crate::auth::domain::UserId;
use crate::board::domain::{ColumnId, TaskStore, Workspace};
use crate::project::domain::{Project, ProjectId};
use crate::task::domain::{
    Assignee, PersistedTaskData, Task, TaskId, TaskPriority, TaskStatus,
};
use chrono::{Duration, Utc};
use mockable::DefaultClock;

/// Builds a persisted task created `age_minutes` ago.
pub(super) fn task(
    project_id: ProjectId,
    title: &str,
    status: TaskStatus,
    age_minutes: i64,
) -> Task {
    let created_at = Utc::now() - Duration::minutes(age_minutes);
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        project_id,
        title: title.to_owned(),
        description: format!("{title} description"),
        status,
        assignee: Assignee::new("Ada"),
        due_date: created_at,
        priority: TaskPriority::Medium,
        created_at,
        updated_at: created_at,
    })
}

/// Inserts one task per `(title, status)` pair in order and returns their
/// ids in the same order.
pub(super) fn seed(
    store: &mut TaskStore,
    project_id: ProjectId,
    tasks: &[(&str, TaskStatus)],
) -> Vec<TaskId> {
    tasks
        .iter()
        .map(|(title, status)| {
            let created = task(project_id, title, *status, 60);
            let id = created.id();
            store.insert_task(created);
            id
        })
        .collect()
}

/// Titles of the tasks in `column`, top to bottom.
pub(super) fn titles(store: &TaskStore, column: ColumnId, project_id: ProjectId) -> Vec<String> {
    store
        .tasks_in(column, project_id)
        .map(|task| task.title().to_owned())
        .collect()
}

/// Column for `status`.
pub(super) const fn column(status: TaskStatus) -> ColumnId {
    ColumnId::for_status(status)
}

/// A workspace holding one project with the given tasks.
pub(super) fn workspace_with(
    tasks: &[(&str, TaskStatus)],
) -> (Workspace<DefaultClock>, ProjectId, Vec<TaskId>) {
    let project = Project::new(UserId::new(), "Launch", "", &DefaultClock).expect("valid project");
    let project_id = project.id();
    let mut workspace = Workspace::new(DefaultClock);
    workspace.load_projects(vec![project]);
    let seeded: Vec<Task> = tasks
        .iter()
        .enumerate()
        .map(|(position, (title, status))| {
            let age = i64::try_from(tasks.len() - position).expect("small fixture");
            task(project_id, title, *status, age)
        })
        .collect();
    let ids = seeded.iter().map(Task::id).collect();
    workspace.hydrate_project(project_id, seeded);
    (workspace, project_id, ids)
}
