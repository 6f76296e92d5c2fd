//! Tests for the board service, including rollback of rejected moves.

use super::fixtures::{column, task, titles};
use crate::auth::domain::UserId;
use crate::board::domain::{DropTarget, MoveOutcome};
use crate::board::services::{BoardError, BoardService};
use crate::persistence::{ApiError, ApiResult};
use crate::project::adapters::memory::InMemoryProjectApi;
use crate::project::domain::{Project, ProjectId, ProjectStatus};
use crate::project::ports::{NewProjectRecord, ProjectApi, ProjectChanges};
use crate::task::adapters::memory::InMemoryTaskApi;
use crate::task::domain::{Task, TaskDomainError, TaskDraft, TaskId, TaskStatus};
use crate::task::ports::{NewTaskRecord, TaskApi, TaskChanges};
use async_trait::async_trait;
use mockable::DefaultClock;
use mockall::mock;
use rstest::rstest;
use std::sync::Arc;

mock! {
    pub Tasks {}

    #[async_trait]
    impl TaskApi for Tasks {
        async fn list_for_project(&self, project_id: ProjectId) -> ApiResult<Vec<Task>>;
        async fn create(&self, record: &NewTaskRecord) -> ApiResult<Task>;
        async fn update(&self, id: TaskId, changes: &TaskChanges) -> ApiResult<Task>;
        async fn delete(&self, id: TaskId) -> ApiResult<()>;
    }
}

mock! {
    pub Projects {}

    #[async_trait]
    impl ProjectApi for Projects {
        async fn list(&self, owner: UserId) -> ApiResult<Vec<Project>>;
        async fn create(&self, record: &NewProjectRecord) -> ApiResult<Project>;
        async fn update(&self, id: ProjectId, changes: &ProjectChanges) -> ApiResult<Project>;
        async fn delete(&self, id: ProjectId, owner: UserId) -> ApiResult<()>;
    }
}

fn server_error() -> ApiError {
    ApiError::Unexpected {
        status: 500,
        body: "boom".to_owned(),
    }
}

async fn project_for(api: &InMemoryProjectApi, owner: UserId) -> ProjectId {
    api.create(&NewProjectRecord {
        owner,
        name: "Launch".to_owned(),
        description: String::new(),
    })
    .await
    .expect("create project")
    .id()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_move_is_rolled_back() {
    let owner = UserId::new();
    let projects = Arc::new(InMemoryProjectApi::new());
    let project_id = project_for(&projects, owner).await;
    let seeded = vec![
        task(project_id, "A", TaskStatus::NotStarted, 30),
        task(project_id, "B", TaskStatus::NotStarted, 20),
        task(project_id, "C", TaskStatus::NotStarted, 10),
    ];
    let b = seeded.get(1).map(Task::id).expect("seeded");

    let mut tasks = MockTasks::new();
    let listed = seeded.clone();
    tasks
        .expect_list_for_project()
        .returning(move |_| Ok(listed.clone()));
    tasks
        .expect_update()
        .times(1)
        .returning(|_, _| Err(server_error()));

    let service = BoardService::new(Arc::new(tasks), projects, DefaultClock, owner);
    service.load_projects().await.expect("load");
    service.select_project(project_id).await.expect("select");

    let result = service
        .move_task(b, DropTarget::Column(column(TaskStatus::InProgress)))
        .await;

    assert!(matches!(result, Err(BoardError::Api(ApiError::Unexpected { .. }))));
    let (not_started, status) = service
        .read(|workspace| {
            (
                titles(workspace.store(), column(TaskStatus::NotStarted), project_id),
                workspace.projects().get(project_id).map(|p| p.status()),
            )
        })
        .expect("readable");
    assert_eq!(not_started, vec!["A", "B", "C"]);
    assert_eq!(status, Some(ProjectStatus::NotStarted));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn accepted_move_persists_task_and_project_status() {
    let owner = UserId::new();
    let projects = Arc::new(InMemoryProjectApi::new());
    let tasks = Arc::new(InMemoryTaskApi::new());
    let project_id = project_for(&projects, owner).await;
    let service = BoardService::new(Arc::clone(&tasks), Arc::clone(&projects), DefaultClock, owner);
    service.load_projects().await.expect("load");
    service.select_project(project_id).await.expect("select");
    let added = service
        .add_task(TaskDraft::new("A", "d", "Ada", "medium"))
        .await
        .expect("add");

    let outcome = service
        .move_task_to_element(added.id(), Some("column-done"))
        .await
        .expect("move");

    assert!(matches!(outcome, MoveOutcome::Moved(_)));
    let stored = tasks.stored(added.id()).expect("state").expect("task");
    assert_eq!(stored.status(), TaskStatus::Done);
    let project = projects.stored(project_id).expect("state").expect("project");
    assert_eq!(project.status(), ProjectStatus::Done);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ignored_drop_makes_no_api_call() {
    let owner = UserId::new();
    let projects = Arc::new(InMemoryProjectApi::new());
    let project_id = project_for(&projects, owner).await;
    let seeded = vec![task(project_id, "A", TaskStatus::Done, 10)];
    let a = seeded.first().map(Task::id).expect("seeded");
    let mut tasks = MockTasks::new();
    tasks
        .expect_list_for_project()
        .returning(move |_| Ok(seeded.clone()));
    tasks.expect_update().never();

    let service = BoardService::new(Arc::new(tasks), projects, DefaultClock, owner);
    service.load_projects().await.expect("load");
    service.select_project(project_id).await.expect("select");

    let outcome = service
        .move_task_to_element(a, Some("column-done"))
        .await
        .expect("ignored drops succeed");

    assert!(matches!(outcome, MoveOutcome::Ignored(_)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_status_save_does_not_fail_the_task_mutation() {
    let owner = UserId::new();
    let seed_api = InMemoryProjectApi::new();
    let project_id = project_for(&seed_api, owner).await;
    let listed = seed_api.list(owner).await.expect("list");

    let mut projects = MockProjects::new();
    projects
        .expect_list()
        .returning(move |_| Ok(listed.clone()));
    projects
        .expect_update()
        .times(1)
        .returning(|_, _| Err(server_error()));
    let tasks = Arc::new(InMemoryTaskApi::new());
    let service = BoardService::new(tasks, Arc::new(projects), DefaultClock, owner);
    service.load_projects().await.expect("load");
    service.select_project(project_id).await.expect("select");
    let added = service
        .add_task(TaskDraft::new("A", "d", "Ada", "medium"))
        .await
        .expect("add");

    let result = service
        .move_task(added.id(), DropTarget::Column(column(TaskStatus::InProgress)))
        .await;

    assert!(result.is_ok());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_task_requires_a_selected_project() {
    let service = BoardService::new(
        Arc::new(InMemoryTaskApi::new()),
        Arc::new(InMemoryProjectApi::new()),
        DefaultClock,
        UserId::new(),
    );

    let result = service.add_task(TaskDraft::new("A", "d", "Ada", "low")).await;

    assert!(matches!(result, Err(BoardError::NoProjectSelected)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_draft_never_reaches_the_api() {
    let owner = UserId::new();
    let projects = Arc::new(InMemoryProjectApi::new());
    let project_id = project_for(&projects, owner).await;
    let mut tasks = MockTasks::new();
    tasks.expect_list_for_project().returning(|_| Ok(Vec::new()));
    tasks.expect_create().never();
    let service = BoardService::new(Arc::new(tasks), projects, DefaultClock, owner);
    service.load_projects().await.expect("load");
    service.select_project(project_id).await.expect("select");

    let result = service.add_task(TaskDraft::new("", "", "Ada", "low")).await;

    assert!(matches!(
        result,
        Err(BoardError::Task(TaskDomainError::Validation { .. }))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_project_is_restored_when_rejected() {
    let owner = UserId::new();
    let seed_api = InMemoryProjectApi::new();
    let project_id = project_for(&seed_api, owner).await;
    let listed = seed_api.list(owner).await.expect("list");
    let mut projects = MockProjects::new();
    projects
        .expect_list()
        .returning(move |_| Ok(listed.clone()));
    projects
        .expect_update()
        .returning(|_, _| Err(ApiError::Authorization { status: 403 }));
    let service = BoardService::new(
        Arc::new(InMemoryTaskApi::new()),
        Arc::new(projects),
        DefaultClock,
        owner,
    );
    service.load_projects().await.expect("load");

    let result = service.complete_project(project_id).await;

    assert!(matches!(
        result,
        Err(BoardError::Api(ApiError::Authorization { status: 403 }))
    ));
    let status = service
        .read(|workspace| workspace.projects().get(project_id).map(|p| p.status()))
        .expect("readable");
    assert_eq!(status, Some(ProjectStatus::NotStarted));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_project_drops_its_tasks() {
    let owner = UserId::new();
    let projects = Arc::new(InMemoryProjectApi::new());
    let project_id = project_for(&projects, owner).await;
    let service = BoardService::new(
        Arc::new(InMemoryTaskApi::new()),
        Arc::clone(&projects),
        DefaultClock,
        owner,
    );
    service.load_projects().await.expect("load");
    service.select_project(project_id).await.expect("select");
    service
        .add_task(TaskDraft::new("A", "d", "Ada", "low"))
        .await
        .expect("add");

    service.delete_project(project_id).await.expect("delete");

    let (empty, selected) = service
        .read(|workspace| {
            (
                workspace.store().is_empty(),
                workspace.projects().selected_id(),
            )
        })
        .expect("readable");
    assert!(empty);
    assert_eq!(selected, None);
    assert_eq!(projects.stored(project_id).expect("state"), None);
}
