//! Acting-user identity for HTTP routes
//!
//! An upstream identity proxy verifies the session and forwards the user's
//! id as a UUID in a header (`X-User-Id` unless configured otherwise). This
//! extractor trusts that header and rejects requests that lack a valid one.
//!
//! # Usage
//!
//! ```rust,ignore
//! async fn handler(AuthenticatedUser(user): AuthenticatedUser) -> impl IntoResponse {
//!     format!("Hello, {}", user)
//! }
//! ```

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, HeaderName},
};
use grimroll_domain::UserId;

use super::http::ApiError;
use super::ApiState;

/// Read the acting user from `header`, if present and a valid UUID.
pub fn user_from_headers(headers: &HeaderMap, header: &HeaderName) -> Option<UserId> {
    headers
        .get(header)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<UserId>().ok())
}

/// Extractor for the acting user in handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub UserId);

impl FromRequestParts<ApiState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ApiState,
    ) -> Result<Self, Self::Rejection> {
        user_from_headers(&parts.headers, &state.user_id_header)
            .map(AuthenticatedUser)
            .ok_or(ApiError::Unauthorized)
    }
}
