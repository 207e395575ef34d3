//! Bearer-token authentication extractor.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};

use super::{error::ApiErrorResponse, state::AppState};
use crate::user::domain::{Identity, SessionToken};

/// Identity of the caller, resolved from `Authorization: Bearer <token>`.
///
/// Handlers that take this extractor reject unauthenticated requests with
/// 401 before running.
#[derive(Debug, Clone)]
pub struct Authenticated(pub Identity);

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = ApiErrorResponse;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)
            .ok_or_else(|| ApiErrorResponse::not_authorized("Not authorized, no token provided"))?;
        let identity = state.users.authenticate(&token).await?;
        Ok(Self(identity))
    }
}

/// Extracts the token from a `Bearer` authorization header.
///
/// The scheme is matched case-insensitively; a missing header, another
/// scheme or an empty token yields `None`.
fn bearer_token(headers: &HeaderMap) -> Option<SessionToken> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let trimmed = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !trimmed.is_empty())
        .then(|| SessionToken::from_raw(trimmed))
}
