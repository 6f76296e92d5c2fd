//! Shared test helpers for in-memory board integration tests.

use std::io;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::auth::domain::UserId;
use taskboard::board::services::BoardService;
use taskboard::project::adapters::memory::InMemoryProjectApi;
use taskboard::task::adapters::memory::InMemoryTaskApi;
use taskboard::task::domain::TaskDraft;
use tokio::runtime::Runtime;

/// Service type wired to the in-memory APIs.
pub type MemoryBoard = BoardService<InMemoryTaskApi, InMemoryProjectApi, DefaultClock>;

/// Backing stores shared by every service built in one test.
#[derive(Clone)]
pub struct Backend {
    pub tasks: Arc<InMemoryTaskApi>,
    pub projects: Arc<InMemoryProjectApi>,
    pub owner: UserId,
}

impl Backend {
    /// Builds a fresh service over the shared stores, as a new session would.
    pub fn board(&self) -> MemoryBoard {
        BoardService::new(
            Arc::clone(&self.tasks),
            Arc::clone(&self.projects),
            DefaultClock,
            self.owner,
        )
    }
}

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides empty in-memory stores for one user.
#[fixture]
pub fn backend() -> Backend {
    Backend {
        tasks: Arc::new(InMemoryTaskApi::new()),
        projects: Arc::new(InMemoryProjectApi::new()),
        owner: UserId::new(),
    }
}

/// Builds a valid draft with the given title.
pub fn draft(title: &str) -> TaskDraft {
    TaskDraft::new(title, "desc", "Alice", "medium")
}
