//! Bearer-token sessions and the authenticated caller identity.

use super::{UserDomainError, UserId, UserSummary};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque bearer token identifying a session.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generates a fresh random token from two v4 UUIDs (244 random bits).
    #[must_use]
    pub fn generate() -> Self {
        Self(format!(
            "{}{}",
            Uuid::new_v4().simple(),
            Uuid::new_v4().simple()
        ))
    }

    /// Wraps a token received from a client.
    #[must_use]
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(6).collect();
        write!(f, "SessionToken({prefix}...)")
    }
}

/// Issued session binding a token to a user until it expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: SessionToken,
    user_id: UserId,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl Session {
    /// Issues a new session for `user_id` that lives for `ttl`.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::SessionExpiryOutOfRange`] when the expiry
    /// timestamp would overflow.
    pub fn issue(
        user_id: UserId,
        ttl: TimeDelta,
        clock: &impl Clock,
    ) -> Result<Self, UserDomainError> {
        let issued_at = clock.utc();
        let expires_at = issued_at.checked_add_signed(ttl).ok_or(
            UserDomainError::SessionExpiryOutOfRange {
                ttl_seconds: ttl.num_seconds(),
            },
        )?;
        Ok(Self {
            token: SessionToken::generate(),
            user_id,
            issued_at,
            expires_at,
        })
    }

    /// Rebuilds a session read back from storage.
    #[must_use]
    pub const fn from_persisted(
        token: SessionToken,
        user_id: UserId,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            token,
            user_id,
            issued_at,
            expires_at,
        }
    }

    /// Returns the bearer token.
    #[must_use]
    pub const fn token(&self) -> &SessionToken {
        &self.token
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the issue timestamp.
    #[must_use]
    pub const fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Returns the expiry timestamp.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns `true` once `now` has reached the expiry time.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Authenticated caller, resolved from a valid session for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// The caller.
    pub user: UserSummary,
    /// Token the caller presented.
    pub token: SessionToken,
}

impl Identity {
    /// Returns the caller's identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user.id
    }
}
