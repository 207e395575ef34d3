//! Validated display name.

use super::UserDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_NAME_LENGTH: usize = 100;

/// Trimmed, non-empty display name of at most 100 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    /// Creates a validated display name.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyName`] for blank input or
    /// [`UserDomainError::NameTooLong`] beyond 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UserDomainError::EmptyName);
        }
        let length = trimmed.chars().count();
        if length > MAX_NAME_LENGTH {
            return Err(UserDomainError::NameTooLong {
                max: MAX_NAME_LENGTH,
                actual: length,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
