//! Characteristic value object - the ten base stats a skill check is rolled against.
//!
//! Skill categories name their governing characteristic; this enum replaces
//! string field lookups so an unknown name fails when the row is read, not
//! when the dice are rolled.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A character's base stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Characteristic {
    /// Melee combat aptitude
    WeaponSkill,
    /// Ranged combat aptitude
    BallisticSkill,
    Strength,
    Toughness,
    Agility,
    Intelligence,
    Perception,
    Willpower,
    Fellowship,
    /// Standing and reach within the character's faction
    Influence,
}

impl Characteristic {
    pub const ALL: [Characteristic; 10] = [
        Self::WeaponSkill,
        Self::BallisticSkill,
        Self::Strength,
        Self::Toughness,
        Self::Agility,
        Self::Intelligence,
        Self::Perception,
        Self::Willpower,
        Self::Fellowship,
        Self::Influence,
    ];

    /// Storage key (snake_case), as written in the `main_skills` table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WeaponSkill => "weapon_skill",
            Self::BallisticSkill => "ballistic_skill",
            Self::Strength => "strength",
            Self::Toughness => "toughness",
            Self::Agility => "agility",
            Self::Intelligence => "intelligence",
            Self::Perception => "perception",
            Self::Willpower => "willpower",
            Self::Fellowship => "fellowship",
            Self::Influence => "influence",
        }
    }

    /// Human-readable name, used as the reason on the `base` modifier.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::WeaponSkill => "Weapon Skill",
            Self::BallisticSkill => "Ballistic Skill",
            Self::Strength => "Strength",
            Self::Toughness => "Toughness",
            Self::Agility => "Agility",
            Self::Intelligence => "Intelligence",
            Self::Perception => "Perception",
            Self::Willpower => "Willpower",
            Self::Fellowship => "Fellowship",
            Self::Influence => "Influence",
        }
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Characteristic {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "weapon_skill" | "ws" => Ok(Self::WeaponSkill),
            "ballistic_skill" | "bs" => Ok(Self::BallisticSkill),
            "strength" | "str" => Ok(Self::Strength),
            "toughness" | "tgh" => Ok(Self::Toughness),
            "agility" | "ag" => Ok(Self::Agility),
            "intelligence" | "int" => Ok(Self::Intelligence),
            "perception" | "per" => Ok(Self::Perception),
            "willpower" | "wil" => Ok(Self::Willpower),
            "fellowship" | "fel" => Ok(Self::Fellowship),
            "influence" | "inf" => Ok(Self::Influence),
            _ => Err(DomainError::parse(format!("Unknown characteristic: {}", s))),
        }
    }
}

/// The ten characteristic scores of one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Characteristics {
    pub weapon_skill: i32,
    pub ballistic_skill: i32,
    pub strength: i32,
    pub toughness: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub perception: i32,
    pub willpower: i32,
    pub fellowship: i32,
    pub influence: i32,
}

impl Characteristics {
    pub fn get(&self, characteristic: Characteristic) -> i32 {
        match characteristic {
            Characteristic::WeaponSkill => self.weapon_skill,
            Characteristic::BallisticSkill => self.ballistic_skill,
            Characteristic::Strength => self.strength,
            Characteristic::Toughness => self.toughness,
            Characteristic::Agility => self.agility,
            Characteristic::Intelligence => self.intelligence,
            Characteristic::Perception => self.perception,
            Characteristic::Willpower => self.willpower,
            Characteristic::Fellowship => self.fellowship,
            Characteristic::Influence => self.influence,
        }
    }

    pub fn with(mut self, characteristic: Characteristic, value: i32) -> Self {
        let slot = match characteristic {
            Characteristic::WeaponSkill => &mut self.weapon_skill,
            Characteristic::BallisticSkill => &mut self.ballistic_skill,
            Characteristic::Strength => &mut self.strength,
            Characteristic::Toughness => &mut self.toughness,
            Characteristic::Agility => &mut self.agility,
            Characteristic::Intelligence => &mut self.intelligence,
            Characteristic::Perception => &mut self.perception,
            Characteristic::Willpower => &mut self.willpower,
            Characteristic::Fellowship => &mut self.fellowship,
            Characteristic::Influence => &mut self.influence,
        };
        *slot = value;
        self
    }
}
