//! Application services for the user directory.

mod directory;

pub use directory::{
    AuthenticatedUser, DEFAULT_SESSION_TTL_HOURS, LoginRequest, RegisterUserRequest,
    UserDirectoryError, UserDirectoryResult, UserDirectoryService,
};
