//! JSON request bodies, query strings and response payloads.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::ApiErrorResponse;
use crate::task::{
    domain::{Task, TaskId, TaskPriority, TaskStatus},
    query::{FilterSpec, SortKey, SortOrder, StatusFilter},
    services::{CreateTaskRequest, UpdateTaskRequest},
};
use crate::user::{
    domain::UserSummary,
    services::{AuthenticatedUser, LoginRequest, RegisterUserRequest},
};

/// Success envelope: `{ "success": true, "message"?, "count"?, "token"?, "data" }`.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    data: T,
}

impl<T> Envelope<T> {
    /// Wraps a payload.
    #[must_use]
    pub const fn new(data: T) -> Self {
        Self {
            success: true,
            message: None,
            count: None,
            token: None,
            data,
        }
    }

    /// Adds a human-readable message.
    #[must_use]
    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

impl<T> Envelope<Vec<T>> {
    /// Wraps a list and records its length in `count`.
    #[must_use]
    pub fn list(data: Vec<T>) -> Self {
        let mut envelope = Self::new(data);
        envelope.count = Some(envelope.data.len());
        envelope
    }
}

impl Envelope<UserSummary> {
    /// Wraps a fresh login, exposing the bearer token beside the user.
    #[must_use]
    pub fn authenticated(authenticated: AuthenticatedUser) -> Self {
        let mut envelope = Self::new(authenticated.user);
        envelope.token = Some(authenticated.session.token().as_str().to_owned());
        envelope
    }
}

/// Task as returned to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    id: TaskId,
    title: String,
    description: String,
    status: TaskStatus,
    priority: TaskPriority,
    assigned_user: UserSummary,
    created_by: UserSummary,
    due_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    is_overdue: bool,
}

impl TaskResponse {
    /// Projects a task, deriving the overdue flag at `now`.
    #[must_use]
    pub fn from_task(task: &Task, now: DateTime<Utc>) -> Self {
        let is_overdue = task.is_overdue(now);
        Self {
            id: task.id(),
            title: task.title().as_str().to_owned(),
            description: task.description().as_str().to_owned(),
            status: task.status(),
            priority: task.priority(),
            assigned_user: task.assigned_user().clone(),
            created_by: task.created_by().clone(),
            due_date: task.due_date(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
            is_overdue,
        }
    }
}

/// Payload for `DELETE /api/tasks/{id}`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DeletedTask {
    /// Identifier of the removed task.
    pub id: TaskId,
}

/// Liveness payload for `GET /health`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Health {
    /// Always `"ok"`.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
}

/// Body of `POST /api/tasks`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskBody {
    title: String,
    description: String,
    assigned_user: String,
    due_date: DateTime<Utc>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    priority: Option<String>,
}

impl From<CreateTaskBody> for CreateTaskRequest {
    fn from(body: CreateTaskBody) -> Self {
        let request = Self::new(body.title, body.description, body.assigned_user, body.due_date);
        let with_status = match body.status {
            Some(status) => request.with_status(status),
            None => request,
        };
        match body.priority {
            Some(priority) => with_status.with_priority(priority),
            None => with_status,
        }
    }
}

/// Body of `PUT /api/tasks/{id}`; every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateTaskBody {
    title: Option<String>,
    description: Option<String>,
    assigned_user: Option<String>,
    due_date: Option<DateTime<Utc>>,
    status: Option<String>,
    priority: Option<String>,
}

impl From<UpdateTaskBody> for UpdateTaskRequest {
    fn from(body: UpdateTaskBody) -> Self {
        let UpdateTaskBody {
            title,
            description,
            assigned_user,
            due_date,
            status,
            priority,
        } = body;

        let mut request = Self::new();
        if let Some(value) = title {
            request = request.with_title(value);
        }
        if let Some(value) = description {
            request = request.with_description(value);
        }
        if let Some(value) = assigned_user {
            request = request.with_assigned_user(value);
        }
        if let Some(value) = due_date {
            request = request.with_due_date(value);
        }
        if let Some(value) = status {
            request = request.with_status(value);
        }
        if let Some(value) = priority {
            request = request.with_priority(value);
        }
        request
    }
}

/// Body of `POST /api/user/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterBody {
    name: String,
    email: String,
    password: String,
}

impl From<RegisterBody> for RegisterUserRequest {
    fn from(body: RegisterBody) -> Self {
        Self::new(body.name, body.email, body.password)
    }
}

/// Body of `POST /api/user/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginBody {
    email: String,
    password: String,
}

impl From<LoginBody> for LoginRequest {
    fn from(body: LoginBody) -> Self {
        Self::new(body.email, body.password)
    }
}

/// Query string of `GET /api/tasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskListQuery {
    search: Option<String>,
    status: Option<String>,
    assigned_user: Option<String>,
    due_date_from: Option<String>,
    due_date_to: Option<String>,
    sort_by: Option<String>,
    sort_order: Option<String>,
}

impl TaskListQuery {
    /// Returns `true` when no parameter was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Converts the parameters into a [`FilterSpec`].
    ///
    /// Unknown status, sort key and sort order values fall back to their
    /// defaults; only unparseable dates are rejected.
    ///
    /// # Errors
    ///
    /// Returns a 400 response when a due-date bound is neither RFC 3339 nor
    /// `YYYY-MM-DD`.
    pub fn into_filter_spec(self) -> Result<FilterSpec, ApiErrorResponse> {
        Ok(FilterSpec {
            search: self.search.unwrap_or_default(),
            status: self
                .status
                .as_deref()
                .map_or(StatusFilter::All, StatusFilter::from_param),
            assigned_user: self.assigned_user,
            due_from: self
                .due_date_from
                .as_deref()
                .map(|raw| parse_date_param("dueDateFrom", raw))
                .transpose()?,
            due_to: self
                .due_date_to
                .as_deref()
                .map(|raw| parse_date_param("dueDateTo", raw))
                .transpose()?,
            sort_by: self
                .sort_by
                .as_deref()
                .map_or_else(SortKey::default, SortKey::from_param),
            sort_order: self
                .sort_order
                .as_deref()
                .map_or_else(SortOrder::default, SortOrder::from_param),
        })
    }
}

/// Parses an RFC 3339 timestamp or a bare date, read as midnight UTC.
fn parse_date_param(name: &str, raw: &str) -> Result<DateTime<Utc>, ApiErrorResponse> {
    let trimmed = raw.trim();
    DateTime::parse_from_rfc3339(trimmed)
        .map(|parsed| parsed.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        })
        .map_err(|_| {
            ApiErrorResponse::validation(vec![format!("{name} must be a date, got {raw:?}")])
        })
}
