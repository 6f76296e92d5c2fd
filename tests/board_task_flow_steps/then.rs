//! Then steps for board task flow BDD scenarios.

use super::world::BoardFlowWorld;
use taskboard::board::domain::ColumnId;
use taskboard::board::services::BoardError;
use taskboard::project::domain::ProjectStatus;
use rstest_bdd_macros::then;
use taskboard::task::domain::{TaskDomainError, TaskField, TaskStatus};

fn column_contains(
    world: &BoardFlowWorld,
    title: &str,
    status: &str,
) -> Result<bool, eyre::Report> {
    let task_id = world.task_id(title)?;
    let expected = TaskStatus::try_from(status)
        .map_err(|err| eyre::eyre!("invalid column status in scenario: {err}"))?;
    let column = ColumnId::for_status(expected);
    world
        .service
        .read(|workspace| {
            workspace.store().columns().get(column).position(task_id).is_some()
                && workspace.store().get(task_id).map(|task| task.status()) == Some(expected)
        })
        .map_err(|err| eyre::eyre!("read board state: {err}"))
}

#[then(r#"the task "{title}" is in the "{status}" column"#)]
fn task_in_column(
    world: &BoardFlowWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    if !column_contains(world, &title, &status)? {
        return Err(eyre::eyre!("expected {title:?} in the {status} column"));
    }
    Ok(())
}

#[then(r#"the task "{title}" is not in the "{status}" column"#)]
fn task_not_in_column(
    world: &BoardFlowWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let column_status = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid column status in scenario: {err}"))?;
    let listed = world
        .service
        .read(|workspace| {
            workspace
                .store()
                .columns()
                .get(ColumnId::for_status(column_status))
                .position(task_id)
                .is_some()
        })
        .map_err(|err| eyre::eyre!("read board state: {err}"))?;
    if listed {
        return Err(eyre::eyre!("did not expect {title:?} in the {status} column"));
    }
    Ok(())
}

#[then("the incomplete task count is {count:usize}")]
fn incomplete_count_is(world: &BoardFlowWorld, count: usize) -> Result<(), eyre::Report> {
    let project_id = world.project_id()?;
    let actual = world
        .service
        .read(|workspace| workspace.incomplete_task_count(project_id))
        .map_err(|err| eyre::eyre!("read board state: {err}"))?;
    if actual != count {
        return Err(eyre::eyre!("expected {count} incomplete tasks, found {actual}"));
    }
    Ok(())
}

#[then(r#"the project status is "{status}""#)]
fn project_status_is(world: &BoardFlowWorld, status: String) -> Result<(), eyre::Report> {
    let expected = ProjectStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid project status in scenario: {err}"))?;
    let project_id = world.project_id()?;
    let actual = world
        .service
        .read(|workspace| workspace.projects().get(project_id).map(|p| p.status()))
        .map_err(|err| eyre::eyre!("read board state: {err}"))?;
    if actual != Some(expected) {
        return Err(eyre::eyre!("expected project status {expected}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the submission fails naming the "{field}" field"#)]
fn submission_fails_naming(world: &BoardFlowWorld, field: String) -> Result<(), eyre::Report> {
    let result = world
        .last_add_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing add result"))?;
    let Err(BoardError::Task(TaskDomainError::Validation { missing })) = result else {
        return Err(eyre::eyre!("expected a validation failure, got {result:?}"));
    };
    let named = missing.fields().iter().any(|f| f.as_str() == field);
    if !named || missing.contains(TaskField::Description) {
        return Err(eyre::eyre!("unexpected missing fields: {missing}"));
    }
    Ok(())
}
