//! Account endpoints under `/api/user`.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::{
    auth::Authenticated,
    dto::{Envelope, LoginBody, RegisterBody},
    error::ApiErrorResponse,
    state::AppState,
};
use crate::user::domain::UserSummary;

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// `POST /api/user/register`: creates an account and signs it in.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterBody>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Envelope<UserSummary>>)> {
    let Json(body) = payload?;
    let registered = state.users.register(body.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::authenticated(registered).with_message("Registration successful.")),
    ))
}

/// `POST /api/user/login`: exchanges credentials for a bearer token.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginBody>, JsonRejection>,
) -> ApiResult<Json<Envelope<UserSummary>>> {
    let Json(body) = payload?;
    let authenticated = state.users.login(body.into()).await?;
    Ok(Json(
        Envelope::authenticated(authenticated).with_message("Login successful."),
    ))
}

/// `POST /api/user/logout`: revokes the presented token.
pub async fn logout(
    State(state): State<AppState>,
    Authenticated(caller): Authenticated,
) -> ApiResult<Json<Envelope<UserSummary>>> {
    state.users.logout(&caller.token).await?;
    Ok(Json(
        Envelope::new(caller.user).with_message("Logged out successfully"),
    ))
}

/// `GET /api/user`: assignable users ordered by name.
pub async fn list_users(
    State(state): State<AppState>,
    Authenticated(_caller): Authenticated,
) -> ApiResult<Json<Envelope<Vec<UserSummary>>>> {
    let users = state.users.list_users().await?;
    Ok(Json(Envelope::list(users)))
}
