//! User aggregate and its public projection.

use super::{EmailAddress, PasswordHash, UserId, UserName};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Registered user, including credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: UserName,
    email: EmailAddress,
    password: PasswordHash,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted identifier.
    pub id: UserId,
    /// Persisted display name.
    pub name: UserName,
    /// Persisted email address.
    pub email: EmailAddress,
    /// Persisted password digest.
    pub password: PasswordHash,
    /// Persisted registration timestamp.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Registers a new user stamped with the clock's current time.
    #[must_use]
    pub fn register(
        name: UserName,
        email: EmailAddress,
        password: PasswordHash,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: UserId::new(),
            name,
            email,
            password,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            email: data.email,
            password: data.password,
            created_at: data.created_at,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &UserName {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the password digest.
    #[must_use]
    pub const fn password(&self) -> &PasswordHash {
        &self.password
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the public projection of this user.
    #[must_use]
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: self.name.as_str().to_owned(),
            email: self.email.as_str().to_owned(),
        }
    }
}

/// Public projection of a user, safe to embed in tasks and responses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserSummary {
    /// User identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl UserSummary {
    /// Returns `true` when `value` is exactly this user's identifier or
    /// display name.
    #[must_use]
    pub fn matches_identity(&self, value: &str) -> bool {
        self.name == value || self.id.to_string() == value
    }

    /// Returns `true` when the case-folded name or email contains `needle`.
    ///
    /// `needle` must already be case-folded.
    #[must_use]
    pub fn display_text_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.email.to_lowercase().contains(needle)
    }
}
