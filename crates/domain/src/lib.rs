pub mod entities;
pub mod error;
pub mod ids;
pub mod skill_check;
pub mod value_objects;

pub use entities::{
    Character, CharacterSkill, MainSkill, NewRollLog, RollLog, Skill, SkillCheckSubject,
};

pub use error::DomainError;

// Re-export ID types
pub use ids::{CharacterId, MainSkillId, RollLogId, SkillId, UserId};

// Re-export skill check rules
pub use skill_check::{
    aggregate_target, DegreeOutcome, TargetBreakdown, TargetInput, UNTRAINED_PENALTY,
};

// Re-export value objects
pub use value_objects::{
    AppliedModifier, Characteristic, Characteristics, ModifierKind, ModifierLevel,
    PercentileRoll, Situational, SkillTier,
};
