//! Given steps for board task flow BDD scenarios.

use super::world::{BoardFlowWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::board::domain::{ColumnId, DropTarget};
use taskboard::task::domain::{TaskDraft, TaskStatus};

#[given(r#"a signed-in user with a project named "{name}""#)]
fn user_with_project(world: &mut BoardFlowWorld, name: String) -> Result<(), eyre::Report> {
    let project = run_async(world.service.create_project(&name, ""))
        .wrap_err("create project for scenario")?;
    run_async(world.service.select_project(project.id())).wrap_err("select project")?;
    world.project_id = Some(project.id());
    Ok(())
}

#[given(r#"the project has a task titled "{title}""#)]
fn project_has_task(world: &mut BoardFlowWorld, title: String) -> Result<(), eyre::Report> {
    let task = run_async(
        world
            .service
            .add_task(TaskDraft::new(title.as_str(), "desc", "Alice", "medium")),
    )
    .wrap_err("add task for scenario")?;
    world.task_ids.insert(title, task.id());
    Ok(())
}

#[given(r#"the task "{title}" has been started"#)]
fn task_has_been_started(world: &mut BoardFlowWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let target = DropTarget::Column(ColumnId::for_status(TaskStatus::InProgress));
    run_async(world.service.move_task(task_id, target)).wrap_err("start task")?;
    Ok(())
}
