//! Roll log entity - the permanent record of a resolved skill check
//!
//! A roll log row is written once and never changed. It is the sole source of
//! truth for what a roll was when a result is disputed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, RollLogId, SkillId, UserId};
use crate::value_objects::{AppliedModifier, PercentileRoll};

/// A computed check that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRollLog {
    pub user_id: UserId,
    pub character_id: CharacterId,
    pub skill_id: SkillId,
    /// Short dice notation, e.g. `1d100 vs 45 (Dodge)`
    pub notation: String,
    pub modifiers: Vec<AppliedModifier>,
    pub raw_roll: PercentileRoll,
    pub final_target: i32,
    pub degrees_of_success: i32,
    pub is_critical_success: bool,
    pub is_critical_failure: bool,
    /// Narrative breakdown, e.g. `Agility 35 + Level 2 (+10) = 45; rolled 42: success, 1 degree`
    pub breakdown: String,
}

/// A persisted, immutable roll record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollLog {
    pub id: RollLogId,
    pub user_id: UserId,
    pub character_id: CharacterId,
    pub skill_id: SkillId,
    pub notation: String,
    pub modifiers: Vec<AppliedModifier>,
    pub raw_roll: PercentileRoll,
    pub final_target: i32,
    pub degrees_of_success: i32,
    pub is_critical_success: bool,
    pub is_critical_failure: bool,
    pub breakdown: String,
    pub created_at: DateTime<Utc>,
}

impl RollLog {
    /// Stamp a computed check with the identity and time assigned on insert.
    pub fn from_new(entry: NewRollLog, id: RollLogId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: entry.user_id,
            character_id: entry.character_id,
            skill_id: entry.skill_id,
            notation: entry.notation,
            modifiers: entry.modifiers,
            raw_roll: entry.raw_roll,
            final_target: entry.final_target,
            degrees_of_success: entry.degrees_of_success,
            is_critical_success: entry.is_critical_success,
            is_critical_failure: entry.is_critical_failure,
            breakdown: entry.breakdown,
            created_at,
        }
    }

    /// The reported outcome, derived the same way the check reported it.
    pub fn success(&self) -> bool {
        self.raw_roll.value() <= self.final_target || self.is_critical_success
    }
}
