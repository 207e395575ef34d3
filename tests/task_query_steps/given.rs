//! Given steps for task query BDD scenarios.

use super::world::{TaskQueryWorld, parse_day};
use chrono::{DateTime, Utc};
use rstest_bdd_macros::given;
use taskboard::task::domain::{
    PersistedTaskData, Task, TaskDescription, TaskId, TaskPriority, TaskStatus, TaskTitle,
};

fn push_task(
    world: &mut TaskQueryWorld,
    title: String,
    status: &str,
    due_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
) -> Result<(), eyre::Report> {
    let parsed_status = TaskStatus::try_from(status)
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let checked_title =
        TaskTitle::new(title).map_err(|err| eyre::eyre!("invalid title in scenario: {err}"))?;
    let description = TaskDescription::new("Scenario task")
        .map_err(|err| eyre::eyre!("invalid description in scenario: {err}"))?;

    world.tasks.push(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        title: checked_title,
        description,
        status: parsed_status,
        priority: TaskPriority::Medium,
        assigned_user: world.owner.clone(),
        created_by: world.owner.clone(),
        due_date,
        created_at,
        updated_at: created_at,
    }));
    Ok(())
}

#[given(r#"a task "{title}" with status "{status}" due on "{due}""#)]
fn task_with_status_and_due(
    world: &mut TaskQueryWorld,
    title: String,
    status: String,
    due: String,
) -> Result<(), eyre::Report> {
    let created_at = parse_day("2024-12-01")?;
    push_task(world, title, &status, parse_day(&due)?, created_at)
}

#[given(r#"a newer task "{title}" created on "{created}" with status "{status}" due on "{due}""#)]
fn newer_task(
    world: &mut TaskQueryWorld,
    title: String,
    created: String,
    status: String,
    due: String,
) -> Result<(), eyre::Report> {
    push_task(world, title, &status, parse_day(&due)?, parse_day(&created)?)
}
