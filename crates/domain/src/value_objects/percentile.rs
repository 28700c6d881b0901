//! Percentile (d100) roll value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// One d100 result, always within `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct PercentileRoll(u8);

impl PercentileRoll {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 100;

    pub fn new(value: i32) -> Result<Self, DomainError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            // Range checked above, so the cast cannot truncate.
            Ok(Self(value as u8))
        } else {
            Err(DomainError::validation(format!(
                "Percentile roll must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )))
        }
    }

    /// Map a zero-based offset onto a face: `0 -> 01`, `99 -> 100`.
    ///
    /// Offsets of 100 and above wrap, so the result is always a valid face.
    /// RNG adapters sample `0..100` and call this to avoid a fallible path.
    pub fn from_offset(offset: u8) -> Self {
        Self(offset % 100 + 1)
    }

    pub fn value(&self) -> i32 {
        i32::from(self.0)
    }

    /// Tens digit used by the degree rules (100 counts as 10).
    pub fn tens(&self) -> i32 {
        self.value() / 10
    }

    /// A natural 01 always succeeds.
    pub fn is_auto_success(&self) -> bool {
        self.0 == 1
    }

    /// A natural 100 always fails.
    pub fn is_auto_failure(&self) -> bool {
        self.0 == 100
    }
}

impl TryFrom<i32> for PercentileRoll {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for PercentileRoll {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        i32::try_from(value)
            .map_err(|_| DomainError::validation(format!("Percentile roll out of range: {}", value)))
            .and_then(Self::new)
    }
}

impl From<PercentileRoll> for i32 {
    fn from(value: PercentileRoll) -> Self {
        value.value()
    }
}

impl fmt::Display for PercentileRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}
