//! Task flow tests for [`BoardService`] over the in-memory APIs.
//!
//! [`BoardService`]: taskboard::board::services::BoardService

use crate::in_memory::helpers::{Backend, backend, draft, runtime};
use rstest::rstest;
use std::io;
use taskboard::board::domain::{ColumnId, DropTarget, MoveOutcome};
use taskboard::project::domain::ProjectStatus;
use taskboard::task::domain::TaskStatus;
use tokio::runtime::Runtime;

type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Moves survive a reload from the API.
#[rstest]
fn moved_task_is_placed_by_status_after_reload(
    runtime: io::Result<Runtime>,
    backend: Backend,
) -> TestResult {
    let rt = runtime?;
    let board = backend.board();

    let project = rt.block_on(board.create_project("p1", ""))?;
    rt.block_on(board.select_project(project.id()))?;
    let first = rt.block_on(board.add_task(draft("Write spec")))?;
    let second = rt.block_on(board.add_task(draft("Review spec")))?;

    let target = DropTarget::Column(ColumnId::for_status(TaskStatus::Done));
    let outcome = rt.block_on(board.move_task(first.id(), target))?;
    assert!(matches!(outcome, MoveOutcome::Moved(_)));

    let reloaded = backend.board();
    rt.block_on(reloaded.load_projects())?;
    rt.block_on(reloaded.select_project(project.id()))?;

    let (done, not_started, status) = reloaded.read(|workspace| {
        let columns = workspace.store().columns();
        (
            columns
                .get(ColumnId::for_status(TaskStatus::Done))
                .task_ids()
                .to_vec(),
            columns
                .get(ColumnId::for_status(TaskStatus::NotStarted))
                .task_ids()
                .to_vec(),
            workspace.projects().get(project.id()).map(|p| p.status()),
        )
    })?;
    assert_eq!(done, vec![first.id()]);
    assert_eq!(not_started, vec![second.id()]);
    assert_eq!(status, Some(ProjectStatus::InProgress));
    Ok(())
}

/// Dropping a card on another card adopts that card's column.
#[rstest]
fn drop_on_card_adopts_its_column(runtime: io::Result<Runtime>, backend: Backend) -> TestResult {
    let rt = runtime?;
    let board = backend.board();

    let project = rt.block_on(board.create_project("p1", ""))?;
    rt.block_on(board.select_project(project.id()))?;
    let anchor = rt.block_on(board.add_task(draft("Anchor")))?;
    let mover = rt.block_on(board.add_task(draft("Mover")))?;
    rt.block_on(board.move_task(
        anchor.id(),
        DropTarget::Column(ColumnId::for_status(TaskStatus::InProgress)),
    ))?;

    rt.block_on(board.move_task(mover.id(), DropTarget::Task(anchor.id())))?;

    let stored = backend
        .tasks
        .stored(mover.id())?
        .ok_or("moved task missing from the API")?;
    assert_eq!(stored.status(), TaskStatus::InProgress);

    let in_progress = board.read(|workspace| {
        workspace
            .store()
            .columns()
            .get(ColumnId::for_status(TaskStatus::InProgress))
            .task_ids()
            .to_vec()
    })?;
    assert_eq!(in_progress, vec![mover.id(), anchor.id()]);
    Ok(())
}

/// Deleting a task removes it from the API and every column.
#[rstest]
fn deleted_task_leaves_api_and_columns(
    runtime: io::Result<Runtime>,
    backend: Backend,
) -> TestResult {
    let rt = runtime?;
    let board = backend.board();

    let project = rt.block_on(board.create_project("p1", ""))?;
    rt.block_on(board.select_project(project.id()))?;
    let task = rt.block_on(board.add_task(draft("Write spec")))?;

    rt.block_on(board.delete_task(task.id()))?;

    assert!(backend.tasks.stored(task.id())?.is_none());
    let placed = board.read(|workspace| workspace.store().columns().locate(task.id()))?;
    assert!(placed.is_none());
    Ok(())
}
