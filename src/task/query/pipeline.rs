//! The task selection pipeline: search, filter, then sort.

use super::{FilterSpec, SortKey, SortOrder};
use crate::task::domain::Task;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Selects and orders the tasks matching `spec`.
///
/// Stages run in a fixed order: text search, status, assigned user, due-date
/// range, then a stable sort. `tasks` is not modified, and tasks with equal
/// sort keys keep their input order in either direction. Inverted date bounds
/// are not an error; they simply select nothing.
#[must_use]
pub fn select(tasks: &[Task], spec: &FilterSpec) -> Vec<Task> {
    let needle = spec.search.trim().to_lowercase();
    let assignee = spec
        .assigned_user
        .as_deref()
        .filter(|value| !value.trim().is_empty());

    let mut selected: Vec<Task> = tasks
        .iter()
        .filter(|task| needle.is_empty() || matches_search(task, &needle))
        .filter(|task| spec.status.admits(task.status()))
        .filter(|task| assignee.is_none_or(|value| task.assigned_user().matches_identity(value)))
        .filter(|task| within_due_range(task.due_date(), spec.due_from, spec.due_to))
        .cloned()
        .collect();

    selected.sort_by(|left, right| {
        let ordering = compare_by(spec.sort_by, left, right);
        match spec.sort_order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    selected
}

fn matches_search(task: &Task, needle: &str) -> bool {
    task.title().as_str().to_lowercase().contains(needle)
        || task.description().as_str().to_lowercase().contains(needle)
        || task.assigned_user().display_text_contains(needle)
}

fn within_due_range(
    due: DateTime<Utc>,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
) -> bool {
    from.is_none_or(|lower| due >= lower) && to.is_none_or(|upper| due <= upper)
}

fn compare_by(key: SortKey, left: &Task, right: &Task) -> Ordering {
    match key {
        SortKey::DueDate => left.due_date().cmp(&right.due_date()),
        SortKey::CreatedAt => left.created_at().cmp(&right.created_at()),
        SortKey::Title => left
            .title()
            .as_str()
            .to_lowercase()
            .cmp(&right.title().as_str().to_lowercase()),
        SortKey::Status => left.status().rank().cmp(&right.status().rank()),
    }
}
