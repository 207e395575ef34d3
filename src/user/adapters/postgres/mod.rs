//! `PostgreSQL` adapters for users and their sessions.

mod models;
mod repository;
mod schema;
mod session;

pub use repository::{PostgresUserRepository, UserPgPool};
pub use session::PostgresSessionRepository;
