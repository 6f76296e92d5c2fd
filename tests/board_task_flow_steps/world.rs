//! Shared world state for board task flow BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::auth::domain::UserId;
use taskboard::board::services::{BoardError, BoardService};
use taskboard::project::{adapters::memory::InMemoryProjectApi, domain::ProjectId};
use taskboard::task::{
    adapters::memory::InMemoryTaskApi,
    domain::{Task, TaskId},
};

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<InMemoryTaskApi, InMemoryProjectApi, DefaultClock>;

/// Scenario world for board task flow behaviour tests.
pub struct BoardFlowWorld {
    pub service: TestBoardService,
    pub project_id: Option<ProjectId>,
    pub task_ids: HashMap<String, TaskId>,
    pub last_add_result: Option<Result<Task, BoardError>>,
}

impl BoardFlowWorld {
    /// Creates a world for a fresh user with no projects.
    #[must_use]
    pub fn new() -> Self {
        let service = BoardService::new(
            Arc::new(InMemoryTaskApi::new()),
            Arc::new(InMemoryProjectApi::new()),
            DefaultClock,
            UserId::new(),
        );

        Self {
            service,
            project_id: None,
            task_ids: HashMap::new(),
            last_add_result: None,
        }
    }

    /// Returns the scenario's project.
    ///
    /// # Errors
    ///
    /// Returns an error when no project was set up.
    pub fn project_id(&self) -> Result<ProjectId, eyre::Report> {
        self.project_id
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))
    }

    /// Returns the id of the task created with `title`.
    ///
    /// # Errors
    ///
    /// Returns an error when no such task was created.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.task_ids
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} in scenario world"))
    }
}

impl Default for BoardFlowWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardFlowWorld {
    BoardFlowWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
