//! Caller-supplied filter, search and sort criteria.

use crate::task::domain::TaskStatus;
use chrono::{DateTime, Utc};

/// Status criterion of a [`FilterSpec`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Every status passes.
    #[default]
    All,
    /// Only tasks in exactly this status pass.
    Only(TaskStatus),
}

impl StatusFilter {
    /// Parses a query parameter. `"all"` and unrecognised values yield
    /// [`StatusFilter::All`].
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        TaskStatus::try_from(value).map_or(Self::All, Self::Only)
    }

    /// Returns `true` when a task in `status` passes this filter.
    #[must_use]
    pub fn admits(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

/// Field used to order the selected tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Chronological by due date.
    DueDate,
    /// Chronological by creation time.
    #[default]
    CreatedAt,
    /// Case-insensitive lexicographic by title.
    Title,
    /// By status rank: pending, in progress, completed.
    Status,
}

impl SortKey {
    /// Parses a query parameter such as `dueDate` or `created_at`.
    /// Unrecognised values fall back to [`SortKey::CreatedAt`].
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        match fold_param(value).as_str() {
            "duedate" => Self::DueDate,
            "title" => Self::Title,
            "status" => Self::Status,
            _ => Self::CreatedAt,
        }
    }
}

/// Direction applied to the sort key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest key first.
    Ascending,
    /// Largest key first.
    #[default]
    Descending,
}

impl SortOrder {
    /// Parses `asc`/`ascending` or `desc`/`descending`.
    /// Unrecognised values fall back to [`SortOrder::Descending`].
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        match fold_param(value).as_str() {
            "asc" | "ascending" => Self::Ascending,
            _ => Self::Descending,
        }
    }
}

/// Search, filter and sort criteria applied by [`super::select`].
///
/// The default spec passes every task through and orders them newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Free-text search; blank means no search.
    pub search: String,
    /// Status criterion.
    pub status: StatusFilter,
    /// Assigned user id or exact display name; `None` or blank means any.
    pub assigned_user: Option<String>,
    /// Inclusive lower due-date bound.
    pub due_from: Option<DateTime<Utc>>,
    /// Inclusive upper due-date bound.
    pub due_to: Option<DateTime<Utc>>,
    /// Sort key.
    pub sort_by: SortKey,
    /// Sort direction.
    pub sort_order: SortOrder,
}

impl FilterSpec {
    /// Returns a spec that keeps everything and sorts by `key` in `order`.
    #[must_use]
    pub fn sorted(key: SortKey, order: SortOrder) -> Self {
        Self {
            sort_by: key,
            sort_order: order,
            ..Self::default()
        }
    }

    /// Sets the free-text search.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sets the status criterion.
    #[must_use]
    pub const fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Restricts results to one assignee.
    #[must_use]
    pub fn with_assigned_user(mut self, assigned_user: impl Into<String>) -> Self {
        self.assigned_user = Some(assigned_user.into());
        self
    }

    /// Sets the inclusive due-date range; either bound may be open.
    #[must_use]
    pub const fn with_due_range(
        mut self,
        due_from: Option<DateTime<Utc>>,
        due_to: Option<DateTime<Utc>>,
    ) -> Self {
        self.due_from = due_from;
        self.due_to = due_to;
        self
    }
}

fn fold_param(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
