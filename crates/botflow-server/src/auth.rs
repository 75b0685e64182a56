//! Request authentication: resolve the bearer token against stored sessions.

use crate::api::{ApiError, AppState};
use axum::{
    extract::FromRequestParts,
    http::{HeaderValue, header, request::Parts},
};
use botflow_core::{Error, models::User, services};

/// Extractor yielding the authenticated user; rejects with 401 otherwise.
pub struct AuthedUser(pub User);

impl FromRequestParts<AppState> for AuthedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer(parts.headers.get(header::AUTHORIZATION))
            .ok_or(ApiError::from(Error::Unauthenticated))?;
        let user = services::auth::authenticate(state, &token).await?;
        Ok(AuthedUser(user))
    }
}

fn extract_bearer(header: Option<&HeaderValue>) -> Option<String> {
    let value = header?.to_str().ok()?;
    value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))
        .map(|token| token.trim().to_string())
}
