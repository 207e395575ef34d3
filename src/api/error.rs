//! API error envelopes and the mapping from service errors.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::task::{ports::TaskRepositoryError, services::TaskLifecycleError};
use crate::user::{
    domain::UserDomainError, ports::UserRepositoryError, services::UserDirectoryError,
};

/// Error body: `{ "success": false, "code", "message", "errors"? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// Always `false`.
    pub success: bool,
    /// Machine-readable error code.
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Individual validation messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// Status code plus error body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates an error response.
    #[must_use]
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            error: ApiError {
                success: false,
                code,
                message: message.into(),
                errors: None,
            },
        }
    }

    /// 400 with a single message.
    #[must_use]
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, code, message)
    }

    /// 400 listing individual validation failures.
    #[must_use]
    pub fn validation(errors: Vec<String>) -> Self {
        let mut response = Self::bad_request("VALIDATION_ERROR", "Validation Error");
        response.error.errors = Some(errors);
        response
    }

    /// 401 for a missing, malformed, unknown or expired bearer token.
    #[must_use]
    pub fn not_authorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "NOT_AUTHORIZED", message)
    }

    /// 404.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", message)
    }

    /// 409.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, "CONFLICT", message)
    }

    /// 500. The cause is logged, never returned.
    #[must_use]
    pub fn internal(cause: &dyn std::error::Error) -> Self {
        tracing::error!(error = %cause, "request failed");
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "Server Error",
        )
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<TaskLifecycleError> for ApiErrorResponse {
    fn from(error: TaskLifecycleError) -> Self {
        match error {
            TaskLifecycleError::Domain(ref err) => Self::validation(vec![err.to_string()]),
            TaskLifecycleError::InvalidStatus(ref err) => Self::validation(vec![err.to_string()]),
            TaskLifecycleError::InvalidPriority(ref err) => {
                Self::validation(vec![err.to_string()])
            }
            TaskLifecycleError::UnknownUser(ref raw) => {
                Self::validation(vec![format!("assigned user {raw} does not exist")])
            }
            TaskLifecycleError::NotFound(_)
            | TaskLifecycleError::Repository(TaskRepositoryError::NotFound(_)) => {
                Self::not_found("Task not found")
            }
            TaskLifecycleError::Repository(_) | TaskLifecycleError::UserLookup(_) => {
                Self::internal(&error)
            }
        }
    }
}

impl From<UserDirectoryError> for ApiErrorResponse {
    fn from(error: UserDirectoryError) -> Self {
        match error {
            UserDirectoryError::Domain(
                UserDomainError::PasswordHashing(_)
                | UserDomainError::SessionExpiryOutOfRange { .. },
            ) => Self::internal(&error),
            UserDirectoryError::Domain(ref err) => Self::validation(vec![err.to_string()]),
            UserDirectoryError::Repository(UserRepositoryError::DuplicateEmail(_)) => {
                Self::conflict("User already exists")
            }
            UserDirectoryError::InvalidCredentials => Self::new(
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                "Invalid email or password",
            ),
            UserDirectoryError::Unauthenticated => {
                tracing::warn!("rejected bearer token");
                Self::not_authorized("Not authorized, token failed")
            }
            UserDirectoryError::Repository(_) | UserDirectoryError::Session(_) => {
                Self::internal(&error)
            }
        }
    }
}

impl From<JsonRejection> for ApiErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request("INVALID_BODY", rejection.body_text())
    }
}

impl From<QueryRejection> for ApiErrorResponse {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request("INVALID_QUERY", rejection.body_text())
    }
}
