//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, due_in, run_async};
use rstest_bdd_macros::when;
use taskboard::task::services::{CreateTaskRequest, UpdateTaskRequest};

#[when(r#"a task "{title}" due in {days:i64} days is created for "{email}""#)]
fn create_task(
    world: &mut TaskLifecycleWorld,
    title: String,
    days: i64,
    email: String,
) -> Result<(), eyre::Report> {
    let creator = world.creator()?;
    let request = CreateTaskRequest::new(
        title,
        "Scenario task",
        world.assignee_ref(&email),
        due_in(days),
    );
    let result = run_async(world.service.create_task(request, creator));
    if let Ok(ref task) = result {
        world.last_task = Some(task.clone());
    }
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"the task status is changed to "{status}""#)]
fn change_status(world: &mut TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let task = world
        .last_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;

    let result = run_async(
        world
            .service
            .update_task(task.id(), UpdateTaskRequest::new().with_status(status)),
    );
    if let Ok(ref updated) = result {
        world.last_task = Some(updated.clone());
    }
    world.last_result = Some(result);
    Ok(())
}

#[when("the task is deleted")]
fn delete_task(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let task = world
        .last_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    run_async(world.service.delete_task(task.id()))
        .map_err(|err| eyre::eyre!("delete failed: {err}"))
}
