//! Response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Skill checks
// =============================================================================

/// One labelled component of the final target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierData {
    /// `base`, `level`, `situational` or `untrained`
    #[serde(rename = "type")]
    pub kind: String,
    pub value: i32,
    pub reason: String,
}

/// Display-oriented summary of a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollBreakdownData {
    pub base: i32,
    pub level_bonus: i32,
    pub untrained: i32,
    pub situational: i32,
    /// Final target
    pub total: i32,
    /// Raw roll
    pub result: i32,
    /// `|total - result|`
    pub difference: u32,
}

/// Body returned by `POST /api/skill-checks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCheckResponse {
    pub success: bool,
    pub raw_roll: i32,
    pub final_target: i32,
    pub degrees_of_success: i32,
    pub is_critical_success: bool,
    pub is_critical_failure: bool,
    pub modifiers: Vec<ModifierData>,
    pub roll_log_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub breakdown: RollBreakdownData,
}

// =============================================================================
// Roll history
// =============================================================================

/// A stored roll log, as returned by the history endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollLogData {
    pub id: Uuid,
    pub character_id: Uuid,
    pub skill_id: Uuid,
    pub notation: String,
    pub modifiers: Vec<ModifierData>,
    pub raw_roll: i32,
    pub final_target: i32,
    pub degrees_of_success: i32,
    pub success: bool,
    pub is_critical_success: bool,
    pub is_critical_failure: bool,
    pub breakdown: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Errors
// =============================================================================

/// Error classification code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    BadRequest,
    Unauthorized,
    NotFound,
    RateLimited,
    InternalError,
}

/// Body of every non-2xx JSON response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, error: impl Into<String>) -> Self {
        Self {
            code,
            error: error.into(),
        }
    }
}
