//! In-memory adapters for users and sessions.

mod session;
mod user;

pub use session::InMemorySessionRepository;
pub use user::InMemoryUserRepository;
