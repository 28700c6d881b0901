//! Test fixtures: a small character sheet usable in memory or written to SQLite.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::SheetFixture;
//!
//! #[tokio::test]
//! async fn test_dodge() {
//!     let fixture = SheetFixture::new();
//!     let subject = fixture.subject(fixture.dodge.id);
//!     // ... test logic
//! }
//! ```
//!
//! The sheet mirrors what character creation provisions: every basic-tier
//! skill has a row with `is_known = false` and level 1. On top of that the
//! character has trained Acrobatics to level 2 and knows Forbidden Lore at
//! level 3.

use grimroll_domain::{
    Character, CharacterSkill, Characteristic, Characteristics, MainSkill, ModifierLevel, Skill,
    SkillCheckSubject, SkillId, SkillTier, UserId,
};
use sqlx::SqlitePool;

/// Brother Aldric's sheet.
///
/// - Agility 35, Intelligence 50, Weapon Skill 42
/// - Dodge (basic, untrained, level 1)
/// - Acrobatics (basic, trained, level 2)
/// - Forbidden Lore (specialist, known, level 3)
pub struct SheetFixture {
    pub owner: UserId,
    pub character: Character,
    pub reflexes: MainSkill,
    pub scholastic: MainSkill,
    pub dodge: Skill,
    pub acrobatics: Skill,
    pub forbidden_lore: Skill,
    pub training: Vec<CharacterSkill>,
}

impl SheetFixture {
    pub fn new() -> Self {
        let owner = UserId::new();
        let character = Character::new(owner, "Brother Aldric").with_characteristics(
            Characteristics::default()
                .with(Characteristic::WeaponSkill, 42)
                .with(Characteristic::BallisticSkill, 31)
                .with(Characteristic::Strength, 38)
                .with(Characteristic::Toughness, 40)
                .with(Characteristic::Agility, 35)
                .with(Characteristic::Intelligence, 50)
                .with(Characteristic::Perception, 44)
                .with(Characteristic::Willpower, 47)
                .with(Characteristic::Fellowship, 29)
                .with(Characteristic::Influence, 33),
        );

        let reflexes = MainSkill::new("Reflexes", Characteristic::Agility);
        let scholastic = MainSkill::new("Scholastic Lore", Characteristic::Intelligence);
        let dodge = Skill::new(&reflexes, "Dodge", SkillTier::Basic);
        let acrobatics = Skill::new(&reflexes, "Acrobatics", SkillTier::Basic);
        let forbidden_lore = Skill::new(&scholastic, "Forbidden Lore", SkillTier::Specialist);

        let level = |n| ModifierLevel::new(n).expect("valid level");
        let training = vec![
            CharacterSkill::seeded(character.id, dodge.id),
            CharacterSkill::seeded(character.id, acrobatics.id).trained(level(2)),
            CharacterSkill::seeded(character.id, forbidden_lore.id).trained(level(3)),
        ];

        Self {
            owner,
            character,
            reflexes,
            scholastic,
            dodge,
            acrobatics,
            forbidden_lore,
            training,
        }
    }

    /// SQLite URL for a fresh database file inside `dir`.
    pub fn database_url(dir: &tempfile::TempDir) -> String {
        format!("sqlite:{}?mode=rwc", dir.path().join("grimroll.db").display())
    }

    /// Build the sheet and write it through raw SQL, as the provisioning
    /// service would.
    pub async fn provision(pool: &SqlitePool) -> Self {
        let fixture = Self::new();
        fixture.insert(pool).await;
        fixture
    }

    /// The joined record the sheet accessor would return for `skill_id`.
    pub fn subject(&self, skill_id: SkillId) -> SkillCheckSubject {
        let skill = self
            .skills()
            .into_iter()
            .find(|s| s.id == skill_id)
            .expect("skill in fixture");
        let main_skill = [&self.reflexes, &self.scholastic]
            .into_iter()
            .find(|m| m.id == skill.main_skill_id)
            .expect("main skill in fixture")
            .clone();
        let character_skill = *self
            .training
            .iter()
            .find(|t| t.skill_id == skill_id)
            .expect("training row in fixture");

        SkillCheckSubject {
            character: self.character.clone(),
            main_skill,
            skill: skill.clone(),
            character_skill,
        }
    }

    fn skills(&self) -> Vec<&Skill> {
        vec![&self.dodge, &self.acrobatics, &self.forbidden_lore]
    }

    async fn insert(&self, pool: &SqlitePool) {
        let c = &self.character.characteristics;
        sqlx::query(
            "INSERT INTO characters (id, owner_id, name, weapon_skill, ballistic_skill, strength, \
             toughness, agility, intelligence, perception, willpower, fellowship, influence) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(self.character.id.to_string())
        .bind(self.owner.to_string())
        .bind(&self.character.name)
        .bind(c.weapon_skill)
        .bind(c.ballistic_skill)
        .bind(c.strength)
        .bind(c.toughness)
        .bind(c.agility)
        .bind(c.intelligence)
        .bind(c.perception)
        .bind(c.willpower)
        .bind(c.fellowship)
        .bind(c.influence)
        .execute(pool)
        .await
        .expect("insert character");

        for main_skill in [&self.reflexes, &self.scholastic] {
            sqlx::query(
                "INSERT INTO main_skills (id, name, governing_characteristic) VALUES (?, ?, ?)",
            )
            .bind(main_skill.id.to_string())
            .bind(&main_skill.name)
            .bind(main_skill.governing_characteristic.as_str())
            .execute(pool)
            .await
            .expect("insert main skill");
        }

        for skill in self.skills() {
            sqlx::query("INSERT INTO skills (id, main_skill_id, name, tier) VALUES (?, ?, ?, ?)")
                .bind(skill.id.to_string())
                .bind(skill.main_skill_id.to_string())
                .bind(&skill.name)
                .bind(skill.tier.as_str())
                .execute(pool)
                .await
                .expect("insert skill");
        }

        for row in &self.training {
            sqlx::query(
                "INSERT INTO character_skills (character_id, skill_id, is_known, modifier_level) \
                 VALUES (?, ?, ?, ?)",
            )
            .bind(row.character_id.to_string())
            .bind(row.skill_id.to_string())
            .bind(row.is_known)
            .bind(i64::from(row.modifier_level.value()))
            .execute(pool)
            .await
            .expect("insert character skill");
        }
    }
}

impl Default for SheetFixture {
    fn default() -> Self {
        Self::new()
    }
}
