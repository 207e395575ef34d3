//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Internal task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Status wire string.
    pub status: String,
    /// Priority wire string.
    pub priority: String,
    /// Assigned user identifier.
    pub assigned_user_id: uuid::Uuid,
    /// Assigned user snapshot.
    pub assigned_user: Value,
    /// Creating user snapshot.
    pub created_by: Value,
    /// Due date.
    pub due_date: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert and update model for task records.
///
/// The primary key is skipped when used as a changeset.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Internal task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Status wire string.
    pub status: String,
    /// Priority wire string.
    pub priority: String,
    /// Assigned user identifier.
    pub assigned_user_id: uuid::Uuid,
    /// Assigned user snapshot.
    pub assigned_user: Value,
    /// Creating user snapshot.
    pub created_by: Value,
    /// Due date.
    pub due_date: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
