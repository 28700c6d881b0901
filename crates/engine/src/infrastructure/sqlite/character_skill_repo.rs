//! Owner-scoped reads of the joined character/skill record.

use async_trait::async_trait;
use grimroll_domain::{
    Character, CharacterId, CharacterSkill, Characteristic, Characteristics, MainSkill,
    MainSkillId, ModifierLevel, Skill, SkillCheckSubject, SkillId, SkillTier, UserId,
};
use sqlx::sqlite::SqliteRow;
use sqlx::SqlitePool;

use super::{column, uuid_column};
use crate::infrastructure::ports::{CharacterSkillRepo, RepoError};

const SUBJECT_QUERY: &str = r#"
    SELECT
        c.id AS character_id,
        c.owner_id,
        c.name AS character_name,
        c.weapon_skill,
        c.ballistic_skill,
        c.strength,
        c.toughness,
        c.agility,
        c.intelligence,
        c.perception,
        c.willpower,
        c.fellowship,
        c.influence,
        ms.id AS main_skill_id,
        ms.name AS main_skill_name,
        ms.governing_characteristic,
        s.id AS skill_id,
        s.name AS skill_name,
        s.tier,
        cs.is_known,
        cs.modifier_level
    FROM character_skills cs
    JOIN characters c ON c.id = cs.character_id
    JOIN skills s ON s.id = cs.skill_id
    JOIN main_skills ms ON ms.id = s.main_skill_id
    WHERE cs.character_id = ? AND cs.skill_id = ? AND c.owner_id = ?
"#;

/// SQLite implementation of the character sheet accessor.
pub struct SqliteCharacterSkillRepo {
    pool: SqlitePool,
}

impl SqliteCharacterSkillRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CharacterSkillRepo for SqliteCharacterSkillRepo {
    async fn get_check_subject(
        &self,
        owner: UserId,
        character_id: CharacterId,
        skill_id: SkillId,
    ) -> Result<Option<SkillCheckSubject>, RepoError> {
        let row = sqlx::query(SUBJECT_QUERY)
            .bind(character_id.to_string())
            .bind(skill_id.to_string())
            .bind(owner.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("character_skill.get_check_subject", e))?;

        row.as_ref().map(row_to_subject).transpose()
    }
}

fn row_to_subject(row: &SqliteRow) -> Result<SkillCheckSubject, RepoError> {
    let characteristics = Characteristics {
        weapon_skill: column(row, "weapon_skill")?,
        ballistic_skill: column(row, "ballistic_skill")?,
        strength: column(row, "strength")?,
        toughness: column(row, "toughness")?,
        agility: column(row, "agility")?,
        intelligence: column(row, "intelligence")?,
        perception: column(row, "perception")?,
        willpower: column(row, "willpower")?,
        fellowship: column(row, "fellowship")?,
        influence: column(row, "influence")?,
    };

    let character = Character {
        id: CharacterId::from_uuid(uuid_column(row, "character_id")?),
        owner: UserId::from_uuid(uuid_column(row, "owner_id")?),
        name: column(row, "character_name")?,
        characteristics,
    };

    let governing: String = column(row, "governing_characteristic")?;
    let main_skill = MainSkill {
        id: MainSkillId::from_uuid(uuid_column(row, "main_skill_id")?),
        name: column(row, "main_skill_name")?,
        governing_characteristic: governing
            .parse::<Characteristic>()
            .map_err(RepoError::serialization)?,
    };

    let tier: String = column(row, "tier")?;
    let skill = Skill {
        id: SkillId::from_uuid(uuid_column(row, "skill_id")?),
        main_skill_id: main_skill.id,
        name: column(row, "skill_name")?,
        tier: tier.parse::<SkillTier>().map_err(RepoError::serialization)?,
    };

    let modifier_level: i64 = column(row, "modifier_level")?;
    let character_skill = CharacterSkill {
        character_id: character.id,
        skill_id: skill.id,
        is_known: column(row, "is_known")?,
        modifier_level: ModifierLevel::try_from(modifier_level)
            .map_err(RepoError::serialization)?,
    };

    Ok(SkillCheckSubject {
        character,
        main_skill,
        skill,
        character_skill,
    })
}
