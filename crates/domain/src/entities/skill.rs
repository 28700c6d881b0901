//! Skill entities - skill categories, skills and a character's standing in them
//!
//! - [`MainSkill`] groups skills and names the governing characteristic
//! - [`Skill`] belongs to exactly one main skill and has a tier
//! - [`CharacterSkill`] joins a character to a skill with training state

use serde::{Deserialize, Serialize};

use crate::entities::Character;
use crate::ids::{CharacterId, MainSkillId, SkillId};
use crate::value_objects::{Characteristic, ModifierLevel, SkillTier};

/// A category of skills rolled against one characteristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainSkill {
    pub id: MainSkillId,
    pub name: String,
    pub governing_characteristic: Characteristic,
}

impl MainSkill {
    pub fn new(name: impl Into<String>, governing_characteristic: Characteristic) -> Self {
        Self {
            id: MainSkillId::new(),
            name: name.into(),
            governing_characteristic,
        }
    }
}

/// A single skill within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    pub main_skill_id: MainSkillId,
    pub name: String,
    pub tier: SkillTier,
}

impl Skill {
    pub fn new(main_skill: &MainSkill, name: impl Into<String>, tier: SkillTier) -> Self {
        Self {
            id: SkillId::new(),
            main_skill_id: main_skill.id,
            name: name.into(),
            tier,
        }
    }
}

/// A character's training in one skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSkill {
    pub character_id: CharacterId,
    pub skill_id: SkillId,
    pub is_known: bool,
    pub modifier_level: ModifierLevel,
}

impl CharacterSkill {
    /// The row character creation seeds for every basic-tier skill.
    pub fn seeded(character_id: CharacterId, skill_id: SkillId) -> Self {
        Self {
            character_id,
            skill_id,
            is_known: false,
            modifier_level: ModifierLevel::BASE,
        }
    }

    pub fn trained(mut self, modifier_level: ModifierLevel) -> Self {
        self.is_known = true;
        self.modifier_level = modifier_level;
        self
    }
}

/// Everything a skill check needs, read in one owner-scoped lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCheckSubject {
    pub character: Character,
    pub main_skill: MainSkill,
    pub skill: Skill,
    pub character_skill: CharacterSkill,
}

impl SkillCheckSubject {
    pub fn governing_characteristic(&self) -> Characteristic {
        self.main_skill.governing_characteristic
    }
}
