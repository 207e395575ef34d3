//! Service layer for registration, login and session resolution.

use crate::user::{
    domain::{
        EmailAddress, Identity, Password, PasswordHash, Session, SessionToken, User,
        UserDomainError, UserName, UserSummary,
    },
    ports::{
        SessionRepository, SessionRepositoryError, UserRepository, UserRepositoryError,
    },
};
use chrono::TimeDelta;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Session lifetime used when none is configured.
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24 * 30;

/// Request payload for registering a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    name: String,
    email: String,
    password: String,
}

impl RegisterUserRequest {
    /// Creates a registration request.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Request payload for logging in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    /// Creates a login request.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Outcome of a successful registration or login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Public view of the user.
    pub user: UserSummary,
    /// Newly issued session.
    pub session: Session,
}

impl AuthenticatedUser {
    /// Returns the bearer token of the issued session.
    #[must_use]
    pub const fn token(&self) -> &SessionToken {
        self.session.token()
    }
}

/// Service-level errors for the user directory.
#[derive(Debug, Error)]
pub enum UserDirectoryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),
    /// User repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
    /// Session store operation failed.
    #[error(transparent)]
    Session(#[from] SessionRepositoryError),
    /// Email or password did not match a registered user.
    #[error("invalid email or password")]
    InvalidCredentials,
    /// The bearer token is unknown, expired or belongs to a removed user.
    #[error("not authorized, token failed")]
    Unauthenticated,
}

/// Result type for user directory operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// User directory and session orchestration service.
pub struct UserDirectoryService<U, S, C>
where
    U: UserRepository + ?Sized,
    S: SessionRepository + ?Sized,
    C: Clock + Send + Sync,
{
    users: Arc<U>,
    sessions: Arc<S>,
    clock: Arc<C>,
    session_ttl: TimeDelta,
}

impl<U, S, C> Clone for UserDirectoryService<U, S, C>
where
    U: UserRepository + ?Sized,
    S: SessionRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            sessions: Arc::clone(&self.sessions),
            clock: Arc::clone(&self.clock),
            session_ttl: self.session_ttl,
        }
    }
}

impl<U, S, C> UserDirectoryService<U, S, C>
where
    U: UserRepository + ?Sized,
    S: SessionRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new user directory service with the default session lifetime.
    #[must_use]
    pub fn new(users: Arc<U>, sessions: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            users,
            sessions,
            clock,
            session_ttl: TimeDelta::hours(DEFAULT_SESSION_TTL_HOURS),
        }
    }

    /// Overrides the lifetime of newly issued sessions.
    #[must_use]
    pub const fn with_session_ttl(mut self, session_ttl: TimeDelta) -> Self {
        self.session_ttl = session_ttl;
        self
    }

    /// Registers a user and opens a session for them.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Domain`] when a field is invalid, the
    /// password cannot be hashed or the session expiry overflows, and
    /// [`UserDirectoryError::Repository`] with
    /// [`UserRepositoryError::DuplicateEmail`] when the email is taken.
    pub async fn register(
        &self,
        request: RegisterUserRequest,
    ) -> UserDirectoryResult<AuthenticatedUser> {
        let RegisterUserRequest {
            name,
            email,
            password,
        } = request;

        let user_name = UserName::new(name)?;
        let email_address = EmailAddress::new(email)?;
        let checked_password = Password::new(password)?;

        if self.users.find_by_email(&email_address).await?.is_some() {
            return Err(UserRepositoryError::DuplicateEmail(email_address).into());
        }

        let user = User::register(
            user_name,
            email_address,
            PasswordHash::derive(&checked_password)?,
            &*self.clock,
        );
        self.users.store(&user).await?;
        tracing::info!(user_id = %user.id(), "user registered");

        self.open_session(&user).await
    }

    /// Verifies credentials and opens a session.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::InvalidCredentials`] for an unknown email
    /// or a wrong password; both cases are indistinguishable to the caller.
    pub async fn login(&self, request: LoginRequest) -> UserDirectoryResult<AuthenticatedUser> {
        let Ok(email_address) = EmailAddress::new(request.email) else {
            return Err(UserDirectoryError::InvalidCredentials);
        };

        let Some(user) = self.users.find_by_email(&email_address).await? else {
            tracing::warn!("login attempt for unknown email");
            return Err(UserDirectoryError::InvalidCredentials);
        };
        if !user.password().verify(&request.password) {
            tracing::warn!(user_id = %user.id(), "login attempt with wrong password");
            return Err(UserDirectoryError::InvalidCredentials);
        }

        tracing::info!(user_id = %user.id(), "user logged in");
        self.open_session(&user).await
    }

    /// Revokes a session. Revoking an unknown token is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Session`] when the session store fails.
    pub async fn logout(&self, token: &SessionToken) -> UserDirectoryResult<()> {
        let revoked = self.sessions.revoke(token).await?;
        tracing::info!(revoked, "session closed");
        Ok(())
    }

    /// Resolves a bearer token into the caller's identity.
    ///
    /// Expired sessions are removed as a side effect.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Unauthenticated`] when the token is
    /// unknown or expired or its user no longer exists.
    pub async fn authenticate(&self, token: &SessionToken) -> UserDirectoryResult<Identity> {
        let Some(session) = self.sessions.find(token).await? else {
            return Err(UserDirectoryError::Unauthenticated);
        };
        if session.is_expired(self.clock.utc()) {
            self.sessions.revoke(token).await?;
            return Err(UserDirectoryError::Unauthenticated);
        }

        let Some(user) = self.users.find_by_id(session.user_id()).await? else {
            return Err(UserDirectoryError::Unauthenticated);
        };
        Ok(Identity {
            user: user.summary(),
            token: token.clone(),
        })
    }

    /// Lists all users ordered by name, for populating assignee choices.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Repository`] when lookup fails.
    pub async fn list_users(&self) -> UserDirectoryResult<Vec<UserSummary>> {
        let users = self.users.list().await?;
        Ok(users.iter().map(User::summary).collect())
    }

    async fn open_session(&self, user: &User) -> UserDirectoryResult<AuthenticatedUser> {
        let session = Session::issue(user.id(), self.session_ttl, &*self.clock)?;
        let purged = self.sessions.purge_expired(session.issued_at()).await?;
        if purged > 0 {
            tracing::debug!(purged, "expired sessions removed");
        }
        self.sessions.store(&session).await?;
        Ok(AuthenticatedUser {
            user: user.summary(),
            session,
        })
    }
}
