//! Error types for user domain validation.

use thiserror::Error;

/// Errors returned while constructing user domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The display name is empty after trimming.
    #[error("user name must not be empty")]
    EmptyName,

    /// The display name exceeds the storage limit.
    #[error("user name cannot be more than {max} characters (got {actual})")]
    NameTooLong {
        /// Maximum permitted length.
        max: usize,
        /// Length of the rejected value.
        actual: usize,
    },

    /// The email address is malformed.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The password is shorter than the minimum length.
    #[error("password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum permitted length.
        min: usize,
    },

    /// A stored password hash is not a valid PHC string.
    #[error("malformed password hash")]
    MalformedPasswordHash,

    /// The password hasher rejected its input or parameters.
    #[error("password hashing failed: {0}")]
    PasswordHashing(String),

    /// Adding the session lifetime to the issue time overflowed.
    #[error("session lifetime of {ttl_seconds}s cannot be represented")]
    SessionExpiryOutOfRange {
        /// Requested lifetime in seconds.
        ttl_seconds: i64,
    },
}
