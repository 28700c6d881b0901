//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Database access (the SQLite adapter could be swapped for Postgres)
//! - Clock/Random (for testing, and to keep the roll source in one place)

mod error;
mod repos;
mod testing;

// =============================================================================
// Errors
// =============================================================================
pub use error::RepoError;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{CharacterSkillRepo, RollLogRepo};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{MockCharacterSkillRepo, MockRollLogRepo};

#[cfg(test)]
pub use testing::{MockClockPort, MockRandomPort};

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::{ClockPort, RandomPort};
