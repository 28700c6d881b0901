//! Testability ports for injecting time and randomness.

use chrono::{DateTime, Utc};
use grimroll_domain::PercentileRoll;

// =============================================================================
// Testability Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of percentile rolls.
///
/// Production code must back this with a cryptographically secure source.
/// Each call is one committed roll; callers never retry it.
#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    fn roll_percentile(&self) -> PercentileRoll;
}
