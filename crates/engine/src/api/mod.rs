//! API layer - HTTP entry points.

pub mod auth;
pub mod http;
pub mod rate_limit;

use std::sync::Arc;

use axum::http::HeaderName;

use crate::app::App;

pub use auth::AuthenticatedUser;
pub use http::ApiError;
pub use rate_limit::UserRateLimiter;

/// State shared by every handler.
#[derive(Clone)]
pub struct ApiState {
    pub app: Arc<App>,
    /// Header the identity proxy puts the acting user's id in.
    pub user_id_header: HeaderName,
    pub rate_limiter: Arc<UserRateLimiter>,
}

impl ApiState {
    pub fn new(
        app: Arc<App>,
        user_id_header: HeaderName,
        rate_limiter: Arc<UserRateLimiter>,
    ) -> Self {
        Self {
            app,
            user_id_header,
            rate_limiter,
        }
    }
}
