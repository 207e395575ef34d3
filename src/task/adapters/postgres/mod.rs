//! `PostgreSQL` storage for tasks, with user snapshots held as JSONB.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresTaskRepository, TaskPgPool};
