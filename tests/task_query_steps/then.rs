//! Then steps for task query BDD scenarios.

use super::world::TaskQueryWorld;
use rstest_bdd_macros::then;
use taskboard::task::domain::Task;

fn selected(world: &TaskQueryWorld) -> Result<&[Task], eyre::Report> {
    world
        .selected
        .as_deref()
        .ok_or_else(|| eyre::eyre!("no selection was made in this scenario"))
}

#[then(r#"the selected titles are "{expected}""#)]
fn selected_titles_are(world: &TaskQueryWorld, expected: String) -> Result<(), eyre::Report> {
    let wanted: Vec<&str> = expected.split(',').map(str::trim).collect();
    let actual: Vec<&str> = selected(world)?
        .iter()
        .map(|task| task.title().as_str())
        .collect();

    if actual != wanted {
        return Err(eyre::eyre!("expected titles {wanted:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("no tasks are selected")]
fn no_tasks_selected(world: &TaskQueryWorld) -> Result<(), eyre::Report> {
    let tasks = selected(world)?;
    if !tasks.is_empty() {
        return Err(eyre::eyre!("expected no tasks, found {}", tasks.len()));
    }
    Ok(())
}
