//! Storage contract for tasks.
//!
//! Implemented by the in-memory and `PostgreSQL` adapters; services depend
//! only on this trait.

pub mod repository;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
