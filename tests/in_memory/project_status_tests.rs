//! Project status persistence tests over the in-memory APIs.

use crate::in_memory::helpers::{Backend, backend, draft, runtime};
use rstest::rstest;
use std::io;
use taskboard::board::domain::{ColumnId, DropTarget};
use taskboard::project::domain::ProjectStatus;
use taskboard::task::domain::TaskStatus;
use tokio::runtime::Runtime;

type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Finishing every task saves a `Done` project status.
#[rstest]
fn finishing_all_tasks_saves_done(runtime: io::Result<Runtime>, backend: Backend) -> TestResult {
    let rt = runtime?;
    let board = backend.board();

    let project = rt.block_on(board.create_project("p1", ""))?;
    rt.block_on(board.select_project(project.id()))?;
    let task = rt.block_on(board.add_task(draft("Only task")))?;
    let done = DropTarget::Column(ColumnId::for_status(TaskStatus::Done));
    rt.block_on(board.move_task(task.id(), done))?;

    let stored = backend
        .projects
        .stored(project.id())?
        .ok_or("project missing from the API")?;
    assert_eq!(stored.status(), ProjectStatus::Done);
    Ok(())
}

/// Marking a project complete persists the explicit status.
#[rstest]
fn completing_project_persists_status(
    runtime: io::Result<Runtime>,
    backend: Backend,
) -> TestResult {
    let rt = runtime?;
    let board = backend.board();

    let project = rt.block_on(board.create_project("p1", "launch"))?;
    rt.block_on(board.complete_project(project.id()))?;

    let stored = backend
        .projects
        .stored(project.id())?
        .ok_or("project missing from the API")?;
    assert_eq!(stored.status(), ProjectStatus::Done);
    assert_eq!(stored.description(), "launch");
    Ok(())
}

/// Projects of other users stay out of the listing.
#[rstest]
fn listing_is_scoped_to_owner(runtime: io::Result<Runtime>, backend: Backend) -> TestResult {
    let rt = runtime?;
    let board = backend.board();
    rt.block_on(board.create_project("mine", ""))?;

    let stranger = Backend {
        owner: taskboard::auth::domain::UserId::new(),
        ..backend.clone()
    };
    let other_board = stranger.board();
    rt.block_on(other_board.load_projects())?;

    let count = other_board.read(|workspace| workspace.projects().len())?;
    assert_eq!(count, 0);
    Ok(())
}
