//! Character sheet reads for skill checks.

use std::sync::Arc;

use grimroll_domain::{CharacterId, SkillCheckSubject, SkillId, UserId};

use crate::infrastructure::ports::{CharacterSkillRepo, RepoError};

/// Read-only access to characters and their skill training.
pub struct SkillSheet {
    repo: Arc<dyn CharacterSkillRepo>,
}

impl SkillSheet {
    pub fn new(repo: Arc<dyn CharacterSkillRepo>) -> Self {
        Self { repo }
    }

    /// `None` covers both a missing pair and a character owned by someone else.
    pub async fn get_check_subject(
        &self,
        owner: UserId,
        character_id: CharacterId,
        skill_id: SkillId,
    ) -> Result<Option<SkillCheckSubject>, RepoError> {
        self.repo
            .get_check_subject(owner, character_id, skill_id)
            .await
    }
}
