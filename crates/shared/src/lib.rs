//! Grimroll Shared - wire types for the skill check API
//!
//! This crate contains the request and response bodies exchanged between the
//! engine and its clients.
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, uuid, chrono and thiserror
//! 2. **No business logic** - Pure data types, plus presence validation
//! 3. **No domain IDs** - use raw `uuid::Uuid` in DTOs

pub mod requests;
pub mod responses;

pub use requests::{RequestError, SkillCheckRequest, ValidSkillCheckRequest};
pub use responses::{
    ErrorCode, ErrorResponse, ModifierData, RollBreakdownData, RollLogData, SkillCheckResponse,
};
