//! Task aggregate root and its change set.

use super::{TaskDescription, TaskDomainError, TaskId, TaskPriority, TaskStatus, TaskTitle};
use crate::user::domain::UserSummary;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: TaskDescription,
    status: TaskStatus,
    priority: TaskPriority,
    assigned_user: UserSummary,
    created_by: UserSummary,
    due_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Validated inputs for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Task title.
    pub title: TaskTitle,
    /// Task description.
    pub description: TaskDescription,
    /// Initial status.
    pub status: TaskStatus,
    /// Initial priority.
    pub priority: TaskPriority,
    /// User the task is assigned to.
    pub assigned_user: UserSummary,
    /// User creating the task.
    pub created_by: UserSummary,
    /// Due date; must not lie in the past.
    pub due_date: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: TaskDescription,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted assignee snapshot.
    pub assigned_user: UserSummary,
    /// Persisted creator snapshot.
    pub created_by: UserSummary,
    /// Persisted due date.
    pub due_date: DateTime<Utc>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Partial update applied to an existing task. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    /// Replacement title.
    pub title: Option<TaskTitle>,
    /// Replacement description.
    pub description: Option<TaskDescription>,
    /// Replacement status.
    pub status: Option<TaskStatus>,
    /// Replacement priority.
    pub priority: Option<TaskPriority>,
    /// Replacement assignee.
    pub assigned_user: Option<UserSummary>,
    /// Replacement due date.
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskChanges {
    /// Returns `true` when no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.assigned_user.is_none()
            && self.due_date.is_none()
    }
}

impl Task {
    /// Creates a new task stamped with the clock's current time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DueDateInPast`] when the due date lies
    /// before the current time.
    pub fn create(new_task: NewTask, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let now = clock.utc();
        ensure_not_past(new_task.due_date, now)?;

        Ok(Self {
            id: TaskId::new(),
            title: new_task.title,
            description: new_task.description,
            status: new_task.status,
            priority: new_task.priority,
            assigned_user: new_task.assigned_user,
            created_by: new_task.created_by,
            due_date: new_task.due_date,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            assigned_user: data.assigned_user,
            created_by: data.created_by,
            due_date: data.due_date,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the assignee snapshot.
    #[must_use]
    pub const fn assigned_user(&self) -> &UserSummary {
        &self.assigned_user
    }

    /// Returns the creator snapshot.
    #[must_use]
    pub const fn created_by(&self) -> &UserSummary {
        &self.created_by
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when the task is unfinished and its due date has passed.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status != TaskStatus::Completed && self.due_date < now
    }

    /// Applies a partial update and touches `updated_at`.
    ///
    /// The due-date rule only applies when the due date actually changes, so
    /// an overdue task can still have its status or title edited. Nothing is
    /// modified when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DueDateInPast`] when a changed due date lies
    /// before the current time.
    pub fn apply(&mut self, changes: TaskChanges, clock: &impl Clock) -> Result<(), TaskDomainError> {
        let now = clock.utc();
        if let Some(due_date) = changes.due_date.filter(|due| *due != self.due_date) {
            ensure_not_past(due_date, now)?;
        }

        let TaskChanges {
            title,
            description,
            status,
            priority,
            assigned_user,
            due_date,
        } = changes;

        if let Some(value) = title {
            self.title = value;
        }
        if let Some(value) = description {
            self.description = value;
        }
        if let Some(value) = status {
            self.status = value;
        }
        if let Some(value) = priority {
            self.priority = value;
        }
        if let Some(value) = assigned_user {
            self.assigned_user = value;
        }
        if let Some(value) = due_date {
            self.due_date = value;
        }
        self.updated_at = now;
        Ok(())
    }
}

fn ensure_not_past(due_date: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), TaskDomainError> {
    if due_date < now {
        return Err(TaskDomainError::DueDateInPast { due_date, now });
    }
    Ok(())
}
