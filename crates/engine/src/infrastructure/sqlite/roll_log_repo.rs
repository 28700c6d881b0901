//! Append-only roll log storage.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use grimroll_domain::{
    AppliedModifier, CharacterId, PercentileRoll, RollLog, RollLogId, SkillId, UserId,
};
use sqlx::sqlite::SqliteRow;
use sqlx::SqlitePool;

use super::{column, uuid_column};
use crate::infrastructure::ports::{RepoError, RollLogRepo};

const SELECT_COLUMNS: &str = "id, user_id, character_id, skill_id, notation, modifiers_json, \
     raw_roll, final_target, degrees_of_success, is_critical_success, is_critical_failure, \
     breakdown, created_at";

pub struct SqliteRollLogRepo {
    pool: SqlitePool,
}

impl SqliteRollLogRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RollLogRepo for SqliteRollLogRepo {
    async fn insert(&self, log: &RollLog) -> Result<(), RepoError> {
        let modifiers_json =
            serde_json::to_string(&log.modifiers).map_err(RepoError::serialization)?;

        sqlx::query(
            r#"
            INSERT INTO roll_logs (
                id, user_id, character_id, skill_id, notation, modifiers_json,
                raw_roll, final_target, degrees_of_success,
                is_critical_success, is_critical_failure, breakdown, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(log.id.to_string())
        .bind(log.user_id.to_string())
        .bind(log.character_id.to_string())
        .bind(log.skill_id.to_string())
        .bind(&log.notation)
        .bind(modifiers_json)
        .bind(log.raw_roll.value())
        .bind(log.final_target)
        .bind(log.degrees_of_success)
        .bind(log.is_critical_success)
        .bind(log.is_critical_failure)
        .bind(&log.breakdown)
        .bind(log.created_at.to_rfc3339_opts(SecondsFormat::Micros, true))
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("roll_log.insert", e))?;

        Ok(())
    }

    async fn get(&self, owner: UserId, id: RollLogId) -> Result<Option<RollLog>, RepoError> {
        let sql = format!(
            "SELECT {} FROM roll_logs WHERE id = ? AND user_id = ?",
            SELECT_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .bind(owner.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("roll_log.get", e))?;

        row.as_ref().map(row_to_roll_log).transpose()
    }

    async fn list_for_character(
        &self,
        owner: UserId,
        character_id: CharacterId,
        limit: u32,
    ) -> Result<Vec<RollLog>, RepoError> {
        let sql = format!(
            "SELECT {} FROM roll_logs WHERE character_id = ? AND user_id = ? \
             ORDER BY created_at DESC, rowid DESC LIMIT ?",
            SELECT_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(character_id.to_string())
            .bind(owner.to_string())
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("roll_log.list_for_character", e))?;

        rows.iter().map(row_to_roll_log).collect()
    }
}

fn row_to_roll_log(row: &SqliteRow) -> Result<RollLog, RepoError> {
    let modifiers_json: String = column(row, "modifiers_json")?;
    let modifiers: Vec<AppliedModifier> =
        serde_json::from_str(&modifiers_json).map_err(RepoError::serialization)?;

    let raw_roll: i64 = column(row, "raw_roll")?;
    let created_at: String = column(row, "created_at")?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| RepoError::serialization(format!("created_at: {}", e)))?
        .with_timezone(&Utc);

    Ok(RollLog {
        id: RollLogId::from_uuid(uuid_column(row, "id")?),
        user_id: UserId::from_uuid(uuid_column(row, "user_id")?),
        character_id: CharacterId::from_uuid(uuid_column(row, "character_id")?),
        skill_id: SkillId::from_uuid(uuid_column(row, "skill_id")?),
        notation: column(row, "notation")?,
        modifiers,
        raw_roll: PercentileRoll::try_from(raw_roll).map_err(RepoError::serialization)?,
        final_target: column(row, "final_target")?,
        degrees_of_success: column(row, "degrees_of_success")?,
        is_critical_success: column(row, "is_critical_success")?,
        is_critical_failure: column(row, "is_critical_failure")?,
        breakdown: column(row, "breakdown")?,
        created_at,
    })
}
