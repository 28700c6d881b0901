//! Roll ledger - the append-only audit trail of resolved checks.

use std::sync::Arc;

use chrono::SubsecRound;
use grimroll_domain::{CharacterId, NewRollLog, RollLog, RollLogId, UserId};

use crate::infrastructure::ports::{ClockPort, RepoError, RollLogRepo};

/// Roll log operations.
///
/// Rows are only ever appended.
pub struct RollLedger {
    repo: Arc<dyn RollLogRepo>,
    clock: Arc<dyn ClockPort>,
}

impl RollLedger {
    pub fn new(repo: Arc<dyn RollLogRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { repo, clock }
    }

    /// Assign an id and timestamp, then persist exactly one row.
    ///
    /// The timestamp is truncated to the microseconds the store keeps, so the
    /// returned log equals what a later read yields.
    pub async fn record(&self, entry: NewRollLog) -> Result<RollLog, RepoError> {
        let created_at = self.clock.now().trunc_subsecs(6);
        let log = RollLog::from_new(entry, RollLogId::new(), created_at);
        self.repo.insert(&log).await?;
        Ok(log)
    }

    pub async fn get(&self, owner: UserId, id: RollLogId) -> Result<Option<RollLog>, RepoError> {
        self.repo.get(owner, id).await
    }

    pub async fn list_for_character(
        &self,
        owner: UserId,
        character_id: CharacterId,
        limit: u32,
    ) -> Result<Vec<RollLog>, RepoError> {
        self.repo
            .list_for_character(owner, character_id, limit)
            .await
    }
}
