//! Domain entities - Core business objects with identity

mod character;
mod roll_log;
mod skill;

pub use character::Character;
pub use roll_log::{NewRollLog, RollLog};
pub use skill::{CharacterSkill, MainSkill, Skill, SkillCheckSubject};
