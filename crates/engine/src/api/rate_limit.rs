//! Per-user rate limiting for skill check submissions.
//!
//! Each acting user gets a token bucket: `burst` tokens of capacity, refilled
//! at `per_minute` tokens per minute. Tokens are kept scaled by 1000 so
//! millisecond refills don't round away. A rejected request never reaches
//! the handler, so no roll is generated for it.

use std::time::{Duration, Instant};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use dashmap::DashMap;
use grimroll_domain::UserId;

use super::auth::user_from_headers;
use super::http::ApiError;
use super::ApiState;

const SCALE: u64 = 1000;

/// How often `main` sweeps idle buckets.
pub const PRUNE_INTERVAL: Duration = Duration::from_secs(300);

#[derive(Debug, Clone, Copy)]
struct TokenBucket {
    /// Scaled by `SCALE`.
    tokens: u64,
    last_refill: Instant,
}

impl TokenBucket {
    fn refill(&mut self, now: Instant, per_minute: u64, capacity: u64) {
        let elapsed_ms =
            u64::try_from(now.saturating_duration_since(self.last_refill).as_millis())
                .unwrap_or(u64::MAX);
        // per_minute * SCALE / 60_000 scaled tokens per millisecond
        let added = elapsed_ms.saturating_mul(per_minute) / 60;
        if added > 0 {
            self.tokens = self.tokens.saturating_add(added).min(capacity);
            self.last_refill = now;
        }
    }
}

/// Token buckets keyed by acting user.
pub struct UserRateLimiter {
    per_minute: u64,
    capacity: u64,
    buckets: DashMap<UserId, TokenBucket>,
}

impl UserRateLimiter {
    /// `per_minute == 0` disables limiting.
    pub fn new(per_minute: u32, burst: u32) -> Self {
        Self {
            per_minute: u64::from(per_minute),
            capacity: u64::from(burst.max(1)) * SCALE,
            buckets: DashMap::new(),
        }
    }

    pub fn disabled() -> Self {
        Self::new(0, 0)
    }

    pub fn is_enabled(&self) -> bool {
        self.per_minute > 0
    }

    /// Take one token for `user`. Returns `false` when the bucket is empty.
    pub fn try_acquire(&self, user: UserId) -> bool {
        self.try_acquire_at(user, Instant::now())
    }

    pub fn try_acquire_at(&self, user: UserId, now: Instant) -> bool {
        if !self.is_enabled() {
            return true;
        }

        let capacity = self.capacity;
        let mut bucket = self.buckets.entry(user).or_insert(TokenBucket {
            tokens: capacity,
            last_refill: now,
        });
        bucket.refill(now, self.per_minute, capacity);

        if bucket.tokens < SCALE {
            return false;
        }
        bucket.tokens -= SCALE;
        true
    }

    /// Drop buckets that have refilled completely; they hold no state a
    /// fresh bucket wouldn't. Returns how many were removed.
    pub fn prune(&self, now: Instant) -> usize {
        let before = self.buckets.len();
        let (per_minute, capacity) = (self.per_minute, self.capacity);
        self.buckets.retain(|_, bucket| {
            bucket.refill(now, per_minute, capacity);
            bucket.tokens < capacity
        });
        before.saturating_sub(self.buckets.len())
    }

    pub fn tracked_users(&self) -> usize {
        self.buckets.len()
    }
}

/// Middleware for the skill check route.
///
/// Requests without a usable identity pass through; the handler's extractor
/// rejects them with 401.
pub async fn limit_skill_checks(
    State(state): State<ApiState>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(user) = user_from_headers(request.headers(), &state.user_id_header) {
        if !state.rate_limiter.try_acquire(user) {
            tracing::warn!(user_id = %user, "Skill check rate limit exceeded");
            return ApiError::RateLimited.into_response();
        }
    }
    next.run(request).await
}
