//! Clock and random implementations.

use chrono::{DateTime, Utc};
use grimroll_domain::PercentileRoll;
use rand::rngs::OsRng;
use rand::Rng;

use crate::infrastructure::ports::{ClockPort, RandomPort};

/// System clock - uses real time.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Percentile rolls drawn from the operating system CSPRNG.
///
/// `OsRng` has no seed and no in-process state, so a roll cannot be
/// predicted from earlier rolls or forced by a client.
pub struct SecureRandom;

impl SecureRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SecureRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SecureRandom {
    fn roll_percentile(&self) -> PercentileRoll {
        let offset: u8 = OsRng.gen_range(0..100);
        PercentileRoll::from_offset(offset)
    }
}

/// Fixed clock for testing.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Fixed roll for testing.
#[cfg(test)]
pub struct FixedRandom(pub PercentileRoll);

#[cfg(test)]
impl RandomPort for FixedRandom {
    fn roll_percentile(&self) -> PercentileRoll {
        self.0
    }
}
