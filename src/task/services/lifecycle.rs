//! Service layer for task creation, retrieval, update and removal.

use crate::task::{
    domain::{
        NewTask, ParseTaskPriorityError, ParseTaskStatusError, Task, TaskChanges,
        TaskDescription, TaskDomainError, TaskId, TaskPriority, TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError},
    query::{self, FilterSpec, TaskCounts},
};
use crate::user::{
    domain::{UserId, UserSummary},
    ports::{UserRepository, UserRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    assigned_user: String,
    due_date: DateTime<Utc>,
    status: Option<String>,
    priority: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    ///
    /// `assigned_user` is the assignee's user identifier.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        assigned_user: impl Into<String>,
        due_date: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            assigned_user: assigned_user.into(),
            due_date,
            status: None,
            priority: None,
        }
    }

    /// Sets the initial status; defaults to `Pending`.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the priority; defaults to `Medium`.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }
}

/// Request payload for a partial task update. Unset fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    assigned_user: Option<String>,
    due_date: Option<DateTime<Utc>>,
    status: Option<String>,
    priority: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Reassigns the task to another user identifier.
    #[must_use]
    pub fn with_assigned_user(mut self, assigned_user: impl Into<String>) -> Self {
        self.assigned_user = Some(assigned_user.into());
        self
    }

    /// Moves the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Changes the status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Changes the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Status string was not recognised.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
    /// Priority string was not recognised.
    #[error(transparent)]
    InvalidPriority(#[from] ParseTaskPriorityError),
    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// User lookup failed.
    #[error(transparent)]
    UserLookup(#[from] UserRepositoryError),
    /// The referenced user does not exist.
    #[error("user not found: {0}")]
    UnknownUser(String),
    /// The task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Repositories may be trait objects, so one service type can front any
/// storage backend chosen at start-up.
pub struct TaskLifecycleService<T, U, C>
where
    T: TaskRepository + ?Sized,
    U: UserRepository + ?Sized,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    users: Arc<U>,
    clock: Arc<C>,
}

impl<T, U, C> Clone for TaskLifecycleService<T, U, C>
where
    T: TaskRepository + ?Sized,
    U: UserRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            users: Arc::clone(&self.users),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<T, U, C> TaskLifecycleService<T, U, C>
where
    T: TaskRepository + ?Sized,
    U: UserRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, users: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            users,
            clock,
        }
    }

    /// Returns the service clock's current time, for deriving overdue flags.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }

    /// Creates a task on behalf of `creator`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] for invalid fields or a past
    /// due date, [`TaskLifecycleError::UnknownUser`] when the assignee or
    /// creator does not exist, or a repository error when persistence fails.
    pub async fn create_task(
        &self,
        request: CreateTaskRequest,
        creator: UserId,
    ) -> TaskLifecycleResult<Task> {
        let CreateTaskRequest {
            title,
            description,
            assigned_user,
            due_date,
            status,
            priority,
        } = request;

        let new_task = NewTask {
            title: TaskTitle::new(title)?,
            description: TaskDescription::new(description)?,
            status: status
                .as_deref()
                .map(TaskStatus::try_from)
                .transpose()?
                .unwrap_or_default(),
            priority: priority
                .as_deref()
                .map(TaskPriority::try_from)
                .transpose()?
                .unwrap_or_default(),
            assigned_user: self.resolve_user(&assigned_user).await?,
            created_by: self.resolve_user(&creator.to_string()).await?,
            due_date,
        };

        let task = Task::create(new_task, &*self.clock)?;
        self.tasks.store(&task).await?;
        tracing::info!(task_id = %task.id(), assignee = %task.assigned_user().id, "task created");
        Ok(task)
    }

    /// Lists every task, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn list_tasks(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.tasks.list().await?)
    }

    /// Lists the tasks selected by `spec`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn query_tasks(&self, spec: &FilterSpec) -> TaskLifecycleResult<Vec<Task>> {
        let snapshot = self.tasks.list().await?;
        Ok(query::select(&snapshot, spec))
    }

    /// Summarises every task by status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn task_counts(&self) -> TaskLifecycleResult<TaskCounts> {
        let snapshot = self.tasks.list().await?;
        Ok(TaskCounts::tally(&snapshot))
    }

    /// Retrieves a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist.
    pub async fn get_task(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.tasks
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(id))
    }

    /// Applies a partial update to a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// [`TaskLifecycleError::Domain`] for invalid fields or a moved due date
    /// in the past, or [`TaskLifecycleError::UnknownUser`] when the new
    /// assignee does not exist.
    pub async fn update_task(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.get_task(id).await?;
        let changes = self.build_changes(request).await?;

        task.apply(changes, &*self.clock)?;
        self.tasks.update(&task).await.map_err(not_found_as_missing)?;
        tracing::info!(task_id = %id, status = %task.status(), "task updated");
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist.
    pub async fn delete_task(&self, id: TaskId) -> TaskLifecycleResult<()> {
        self.tasks.delete(id).await.map_err(not_found_as_missing)?;
        tracing::info!(task_id = %id, "task deleted");
        Ok(())
    }

    async fn build_changes(&self, request: UpdateTaskRequest) -> TaskLifecycleResult<TaskChanges> {
        let UpdateTaskRequest {
            title,
            description,
            assigned_user,
            due_date,
            status,
            priority,
        } = request;

        let assignee = match assigned_user {
            Some(raw) => Some(self.resolve_user(&raw).await?),
            None => None,
        };

        Ok(TaskChanges {
            title: title.map(TaskTitle::new).transpose()?,
            description: description.map(TaskDescription::new).transpose()?,
            status: status.as_deref().map(TaskStatus::try_from).transpose()?,
            priority: priority.as_deref().map(TaskPriority::try_from).transpose()?,
            assigned_user: assignee,
            due_date,
        })
    }

    async fn resolve_user(&self, raw_id: &str) -> TaskLifecycleResult<UserSummary> {
        let unknown = || TaskLifecycleError::UnknownUser(raw_id.to_owned());
        let uuid = Uuid::parse_str(raw_id.trim()).map_err(|_| unknown())?;
        self.users
            .find_by_id(UserId::from_uuid(uuid))
            .await?
            .map(|user| user.summary())
            .ok_or_else(unknown)
    }
}

fn not_found_as_missing(err: TaskRepositoryError) -> TaskLifecycleError {
    match err {
        TaskRepositoryError::NotFound(id) => TaskLifecycleError::NotFound(id),
        other => TaskLifecycleError::Repository(other),
    }
}
