//! Port contracts for the user directory and session store.

pub mod repository;
pub mod session;

pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
pub use session::{SessionRepository, SessionRepositoryError, SessionRepositoryResult};
