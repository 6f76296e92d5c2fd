//! When steps for board task flow BDD scenarios.

use super::world::{BoardFlowWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::task::domain::TaskDraft;

#[when(r#"the user adds a task titled "{title}" assigned to "{assignee}" with priority "{priority}""#)]
fn user_adds_task(
    world: &mut BoardFlowWorld,
    title: String,
    assignee: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let result = run_async(world.service.add_task(TaskDraft::new(
        title.as_str(),
        "desc",
        assignee,
        priority,
    )));
    if let Ok(ref task) = result {
        world.task_ids.insert(title, task.id());
    }
    world.last_add_result = Some(result);
    Ok(())
}

#[when("the user submits a task without a title")]
fn user_submits_untitled_task(world: &mut BoardFlowWorld) -> Result<(), eyre::Report> {
    let result = run_async(
        world
            .service
            .add_task(TaskDraft::new("", "desc", "Alice", "medium")),
    );
    world.last_add_result = Some(result);
    Ok(())
}

#[when(r#"the task "{title}" is dropped on the "{element}" element"#)]
fn task_dropped_on_element(
    world: &mut BoardFlowWorld,
    title: String,
    element: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    run_async(
        world
            .service
            .move_task_to_element(task_id, Some(element.as_str())),
    )
    .wrap_err("drop task")?;
    Ok(())
}

#[when(r#"the task "{title}" is deleted"#)]
fn task_deleted(world: &mut BoardFlowWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    run_async(world.service.delete_task(task_id)).wrap_err("delete task")?;
    Ok(())
}
