//! Domain model for users, credentials and sessions.

mod email;
mod error;
mod ids;
mod name;
mod password;
mod session;
mod user;

pub use email::EmailAddress;
pub use error::UserDomainError;
pub use ids::UserId;
pub use name::UserName;
pub use password::{Password, PasswordHash};
pub use session::{Identity, Session, SessionToken};
pub use user::{PersistedUserData, User, UserSummary};
