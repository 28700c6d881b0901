//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases orchestrate across entity modules to fulfill user stories.

pub mod roll_log;
pub mod skill_check;

pub use roll_log::RollLogUseCases;
pub use skill_check::SkillCheckUseCases;
