//! When steps for task query BDD scenarios.

use super::world::{TaskQueryWorld, parse_day};
use rstest_bdd_macros::when;
use taskboard::task::query::{FilterSpec, SortKey, SortOrder, StatusFilter, select};

fn run(world: &mut TaskQueryWorld, spec: &FilterSpec) {
    world.selected = Some(select(&world.tasks, spec));
}

#[when(r#"the tasks are selected with status "{status}" sorted by "{key}" "{order}""#)]
fn select_sorted(world: &mut TaskQueryWorld, status: String, key: String, order: String) {
    let spec = FilterSpec::sorted(SortKey::from_param(&key), SortOrder::from_param(&order))
        .with_status(StatusFilter::from_param(&status));
    run(world, &spec);
}

#[when(r#"the tasks are filtered to status "{status}""#)]
fn select_by_status(world: &mut TaskQueryWorld, status: String) {
    let spec = FilterSpec::default().with_status(StatusFilter::from_param(&status));
    run(world, &spec);
}

#[when(r#"the tasks are searched for "{text}""#)]
fn search_tasks(world: &mut TaskQueryWorld, text: String) {
    let spec = FilterSpec::default().with_search(text);
    run(world, &spec);
}

#[when(r#"the tasks are selected due between "{from}" and "{to}""#)]
fn select_due_between(
    world: &mut TaskQueryWorld,
    from: String,
    to: String,
) -> Result<(), eyre::Report> {
    let spec =
        FilterSpec::default().with_due_range(Some(parse_day(&from)?), Some(parse_day(&to)?));
    run(world, &spec);
    Ok(())
}
