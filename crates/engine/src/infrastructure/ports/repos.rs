//! Repository port traits for database access.

use async_trait::async_trait;
use grimroll_domain::{CharacterId, RollLog, RollLogId, SkillCheckSubject, SkillId, UserId};

use super::error::RepoError;

// =============================================================================
// Character sheet (read-only)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterSkillRepo: Send + Sync {
    /// Joined character + skill + main skill + training row.
    ///
    /// Returns `None` when the pair does not exist *or* the character is not
    /// owned by `owner`; callers cannot tell the two apart.
    async fn get_check_subject(
        &self,
        owner: UserId,
        character_id: CharacterId,
        skill_id: SkillId,
    ) -> Result<Option<SkillCheckSubject>, RepoError>;
}

// =============================================================================
// Roll log (append-only)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RollLogRepo: Send + Sync {
    /// Insert one row. There is no update or delete.
    async fn insert(&self, log: &RollLog) -> Result<(), RepoError>;

    async fn get(&self, owner: UserId, id: RollLogId) -> Result<Option<RollLog>, RepoError>;

    /// Newest first.
    async fn list_for_character(
        &self,
        owner: UserId,
        character_id: CharacterId,
        limit: u32,
    ) -> Result<Vec<RollLog>, RepoError>;
}
