//! Skill tiers and the per-skill modifier level.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Training category of a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillTier {
    /// Usable untrained, at a penalty
    Basic,
    Trained,
    /// Narrow skills that are presumed always trained
    Specialist,
}

impl SkillTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Trained => "trained",
            Self::Specialist => "specialist",
        }
    }

    /// Only basic skills may be attempted without training, and only they
    /// carry the untrained penalty.
    pub fn allows_untrained_use(&self) -> bool {
        matches!(self, Self::Basic)
    }
}

impl fmt::Display for SkillTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SkillTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "trained" => Ok(Self::Trained),
            "specialist" => Ok(Self::Specialist),
            _ => Err(DomainError::parse(format!("Unknown skill tier: {}", s))),
        }
    }
}

/// Flat scaling bonus tier of a character's skill: 1, 2 or 3 (+0/+10/+20).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ModifierLevel(u8);

impl ModifierLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    /// The level every seeded skill starts at.
    pub const BASE: ModifierLevel = ModifierLevel(1);

    pub fn new(level: u8) -> Result<Self, DomainError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(DomainError::validation(format!(
                "Modifier level must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                level
            )))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// `(level - 1) * 10`
    pub fn bonus(&self) -> i32 {
        (i32::from(self.0) - 1) * 10
    }
}

impl Default for ModifierLevel {
    fn default() -> Self {
        Self::BASE
    }
}

impl TryFrom<u8> for ModifierLevel {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for ModifierLevel {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| DomainError::validation(format!("Modifier level out of range: {}", value)))
            .and_then(Self::new)
    }
}

impl From<ModifierLevel> for u8 {
    fn from(value: ModifierLevel) -> Self {
        value.0
    }
}

impl fmt::Display for ModifierLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_from_str() {
        assert_eq!(SkillTier::from_str("basic"), Ok(SkillTier::Basic));
        assert_eq!(SkillTier::from_str("Trained"), Ok(SkillTier::Trained));
        assert_eq!(SkillTier::from_str(" specialist "), Ok(SkillTier::Specialist));
        assert!(SkillTier::from_str("expert").is_err());
    }

    #[test]
    fn test_only_basic_allows_untrained_use() {
        assert!(SkillTier::Basic.allows_untrained_use());
        assert!(!SkillTier::Trained.allows_untrained_use());
        assert!(!SkillTier::Specialist.allows_untrained_use());
    }

    #[test]
    fn test_modifier_level_bonus() {
        assert_eq!(ModifierLevel::new(1).unwrap().bonus(), 0);
        assert_eq!(ModifierLevel::new(2).unwrap().bonus(), 10);
        assert_eq!(ModifierLevel::new(3).unwrap().bonus(), 20);
    }

    #[test]
    fn test_modifier_level_rejects_out_of_range() {
        assert!(ModifierLevel::new(0).is_err());
        assert!(ModifierLevel::new(4).is_err());
        assert!(ModifierLevel::try_from(-1_i64).is_err());
        assert!(ModifierLevel::try_from(300_i64).is_err());
    }

    #[test]
    fn test_modifier_level_deserialize_validates() {
        let ok: ModifierLevel = serde_json::from_str("2").unwrap();
        assert_eq!(ok.value(), 2);
        assert!(serde_json::from_str::<ModifierLevel>("7").is_err());
    }
}
