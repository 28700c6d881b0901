//! Value objects - Immutable objects defined by their attributes

mod characteristic;
mod modifier;
mod percentile;
mod skill_tier;

pub use characteristic::{Characteristic, Characteristics};
pub use modifier::{AppliedModifier, ModifierKind, Situational};
pub use percentile::PercentileRoll;
pub use skill_tier::{ModifierLevel, SkillTier};
