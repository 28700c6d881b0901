//! Roll history use cases.
//!
//! Read-only access to recorded rolls, so a disputed result can be checked
//! against what was actually logged.

use std::sync::Arc;

use grimroll_domain::{CharacterId, RollLog, RollLogId, UserId};
use grimroll_shared::RollLogData;

use crate::entities::RollLedger;
use crate::infrastructure::ports::RepoError;
use crate::use_cases::skill_check::modifier_data;

/// Container for roll log use cases.
pub struct RollLogUseCases {
    pub history: Arc<RollHistory>,
}

impl RollLogUseCases {
    pub fn new(history: Arc<RollHistory>) -> Self {
        Self { history }
    }
}

/// Fetch one roll or a character's recent rolls.
pub struct RollHistory {
    ledger: Arc<RollLedger>,
}

impl RollHistory {
    pub const DEFAULT_LIMIT: u32 = 20;
    pub const MAX_LIMIT: u32 = 100;

    pub fn new(ledger: Arc<RollLedger>) -> Self {
        Self { ledger }
    }

    pub async fn get(&self, user: UserId, id: RollLogId) -> Result<RollLogData, RollLogError> {
        let log = self.ledger.get(user, id).await?.ok_or_else(|| {
            tracing::debug!(user_id = %user, roll_log_id = %id, "Roll log not found for user");
            RollLogError::NotFound
        })?;
        Ok(roll_log_data(&log))
    }

    /// Newest first. `limit` defaults to 20 and is clamped to `1..=100`.
    pub async fn list_for_character(
        &self,
        user: UserId,
        character_id: CharacterId,
        limit: Option<u32>,
    ) -> Result<Vec<RollLogData>, RollLogError> {
        let limit = limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT);
        let logs = self
            .ledger
            .list_for_character(user, character_id, limit)
            .await?;
        Ok(logs.iter().map(roll_log_data).collect())
    }
}

fn roll_log_data(log: &RollLog) -> RollLogData {
    RollLogData {
        id: log.id.to_uuid(),
        character_id: log.character_id.to_uuid(),
        skill_id: log.skill_id.to_uuid(),
        notation: log.notation.clone(),
        modifiers: log.modifiers.iter().map(modifier_data).collect(),
        raw_roll: log.raw_roll.value(),
        final_target: log.final_target,
        degrees_of_success: log.degrees_of_success,
        success: log.success(),
        is_critical_success: log.is_critical_success,
        is_critical_failure: log.is_critical_failure,
        breakdown: log.breakdown.clone(),
        created_at: log.created_at,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RollLogError {
    #[error("Roll log not found")]
    NotFound,
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use grimroll_domain::{AppliedModifier, ModifierKind, PercentileRoll, SkillId};

    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::MockRollLogRepo;

    fn log(owner: UserId, raw_roll: i32, final_target: i32) -> RollLog {
        RollLog {
            id: RollLogId::new(),
            user_id: owner,
            character_id: CharacterId::new(),
            skill_id: SkillId::new(),
            notation: format!("1d100 vs {} (Dodge)", final_target),
            modifiers: vec![AppliedModifier::new(ModifierKind::Base, final_target, "Agility")],
            raw_roll: PercentileRoll::new(raw_roll).unwrap(),
            final_target,
            degrees_of_success: 1,
            is_critical_success: raw_roll == 1,
            is_critical_failure: raw_roll == 100,
            breakdown: String::new(),
            created_at: Utc::now(),
        }
    }

    fn history(repo: MockRollLogRepo) -> RollHistory {
        RollHistory::new(Arc::new(RollLedger::new(
            Arc::new(repo),
            Arc::new(FixedClock(Utc::now())),
        )))
    }

    #[tokio::test]
    async fn get_maps_the_stored_row() {
        let owner = UserId::new();
        let stored = log(owner, 1, -20);
        let id = stored.id;
        let mut repo = MockRollLogRepo::new();
        repo.expect_get()
            .withf(move |o, i| *o == owner && *i == id)
            .returning(move |_, _| Ok(Some(stored.clone())));

        let data = history(repo).get(owner, id).await.expect("found");

        assert_eq!(data.id, id.to_uuid());
        assert_eq!(data.raw_roll, 1);
        assert_eq!(data.final_target, -20);
        assert!(data.success, "a natural 01 is reported as a success");
        assert_eq!(data.modifiers[0].kind, "base");
    }

    #[tokio::test]
    async fn missing_or_foreign_roll_is_not_found() {
        let mut repo = MockRollLogRepo::new();
        repo.expect_get().returning(|_, _| Ok(None));

        let err = history(repo)
            .get(UserId::new(), RollLogId::new())
            .await
            .unwrap_err();

        assert!(matches!(err, RollLogError::NotFound));
    }

    #[tokio::test]
    async fn list_defaults_and_clamps_limit() {
        let mut repo = MockRollLogRepo::new();
        repo.expect_list_for_character()
            .withf(|_, _, limit| *limit == RollHistory::DEFAULT_LIMIT)
            .times(1)
            .returning(|_, _, _| Ok(vec![]));
        repo.expect_list_for_character()
            .withf(|_, _, limit| *limit == RollHistory::MAX_LIMIT)
            .times(1)
            .returning(|_, _, _| Ok(vec![]));
        repo.expect_list_for_character()
            .withf(|_, _, limit| *limit == 1)
            .times(1)
            .returning(|_, _, _| Ok(vec![]));
        let history = history(repo);
        let (user, character) = (UserId::new(), CharacterId::new());

        history.list_for_character(user, character, None).await.unwrap();
        history.list_for_character(user, character, Some(5_000)).await.unwrap();
        history.list_for_character(user, character, Some(0)).await.unwrap();
    }

    #[tokio::test]
    async fn list_preserves_repository_order() {
        let owner = UserId::new();
        let newest = log(owner, 30, 45);
        let oldest = log(owner, 80, 45);
        let expected = vec![newest.id.to_uuid(), oldest.id.to_uuid()];
        let mut repo = MockRollLogRepo::new();
        repo.expect_list_for_character()
            .returning(move |_, _, _| Ok(vec![newest.clone(), oldest.clone()]));

        let listed = history(repo)
            .list_for_character(owner, CharacterId::new(), Some(10))
            .await
            .unwrap();

        let ids: Vec<_> = listed.iter().map(|d| d.id).collect();
        assert_eq!(ids, expected);
        assert!(!listed[1].success);
    }
}
