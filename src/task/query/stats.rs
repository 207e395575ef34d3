//! Dashboard counts by status.

use crate::task::domain::{Task, TaskStatus};
use serde::Serialize;

/// Task totals per status plus the rounded completion percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCounts {
    /// Number of tasks.
    pub all: usize,
    /// Tasks in [`TaskStatus::Pending`].
    pub pending: usize,
    /// Tasks in [`TaskStatus::InProgress`].
    pub in_progress: usize,
    /// Tasks in [`TaskStatus::Completed`].
    pub completed: usize,
    /// Completed share rounded half-up to a whole percent; `0` with no tasks.
    pub completion_rate: usize,
}

impl TaskCounts {
    /// Counts `tasks` by status.
    #[must_use]
    pub fn tally(tasks: &[Task]) -> Self {
        let mut counts = tasks.iter().fold(Self::default(), |mut acc, task| {
            acc.all += 1;
            match task.status() {
                TaskStatus::Pending => acc.pending += 1,
                TaskStatus::InProgress => acc.in_progress += 1,
                TaskStatus::Completed => acc.completed += 1,
            }
            acc
        });
        counts.completion_rate = rounded_percentage(counts.completed, counts.all);
        counts
    }
}

fn rounded_percentage(part: usize, whole: usize) -> usize {
    part.checked_mul(200)
        .and_then(|scaled| scaled.checked_add(whole))
        .zip(whole.checked_mul(2))
        .and_then(|(numerator, denominator)| numerator.checked_div(denominator))
        .unwrap_or(0)
}
