//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::task::{
    domain::{Task, TaskDomainError},
    services::TaskLifecycleError,
};

fn last_result(
    world: &TaskLifecycleWorld,
) -> Result<&Result<Task, TaskLifecycleError>, eyre::Report> {
    world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing service result"))
}

#[then(r#"the task has status "{status}" and priority "{priority}""#)]
fn task_has_status_and_priority(
    world: &TaskLifecycleWorld,
    status: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let task = world
        .last_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task"))?;

    if task.status().as_str() != status || task.priority().as_str() != priority {
        return Err(eyre::eyre!(
            "expected {status}/{priority}, found {}/{}",
            task.status().as_str(),
            task.priority().as_str()
        ));
    }
    Ok(())
}

#[then("the task count is {count:usize}")]
fn task_count_is(world: &TaskLifecycleWorld, count: usize) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.list_tasks())
        .map_err(|err| eyre::eyre!("list failed: {err}"))?;
    if tasks.len() != count {
        return Err(eyre::eyre!("expected {count} tasks, found {}", tasks.len()));
    }
    Ok(())
}

#[then("the request fails with a validation error")]
fn fails_with_validation(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::DueDateInPast { .. }))
    ) {
        return Err(eyre::eyre!("expected DueDateInPast error, got {result:?}"));
    }
    Ok(())
}

#[then("the request fails with an unknown user error")]
fn fails_with_unknown_user(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(result, Err(TaskLifecycleError::UnknownUser(_))) {
        return Err(eyre::eyre!("expected UnknownUser error, got {result:?}"));
    }
    Ok(())
}

#[then("deleting it again fails with not found")]
fn delete_again_fails(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let task = world
        .last_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task"))?;
    let result = run_async(world.service.delete_task(task.id()));
    if !matches!(result, Err(TaskLifecycleError::NotFound(_))) {
        return Err(eyre::eyre!("expected NotFound error, got {result:?}"));
    }
    Ok(())
}
