//! Skill check use cases.
//!
//! Resolves a percentile skill check. The flow is:
//! 1. Load the character/skill pair, scoped to the acting user
//! 2. Aggregate the target number from the sheet and the situational modifier
//! 3. Roll d100 once, server-side
//! 4. Compute degrees of success or failure
//! 5. Append the roll log row
//! 6. Compose the response from the recorded row
//!
//! If step 5 fails the whole check fails. A roll that was not logged is
//! never returned to the caller.

use std::sync::Arc;

use grimroll_domain::{
    aggregate_target, skill_check, CharacterId, DegreeOutcome, NewRollLog, Situational, SkillId,
    TargetInput, UserId,
};
use grimroll_shared::{SkillCheckResponse, ValidSkillCheckRequest};

mod compose;

pub use compose::compose;
pub(crate) use compose::modifier_data;

use crate::entities::{RollLedger, SkillSheet};
use crate::infrastructure::ports::{RandomPort, RepoError};

/// Container for skill check use cases.
pub struct SkillCheckUseCases {
    pub resolve: Arc<ResolveSkillCheck>,
}

impl SkillCheckUseCases {
    pub fn new(resolve: Arc<ResolveSkillCheck>) -> Self {
        Self { resolve }
    }
}

/// A validated request to resolve one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCheckCommand {
    pub character_id: CharacterId,
    pub skill_id: SkillId,
    pub situational: Situational,
}

impl From<ValidSkillCheckRequest> for SkillCheckCommand {
    fn from(request: ValidSkillCheckRequest) -> Self {
        Self {
            character_id: CharacterId::from_uuid(request.character_id),
            skill_id: SkillId::from_uuid(request.skill_id),
            situational: Situational::new(request.modifier, request.modifier_reason),
        }
    }
}

/// Resolve a skill check use case.
pub struct ResolveSkillCheck {
    sheet: Arc<SkillSheet>,
    ledger: Arc<RollLedger>,
    random: Arc<dyn RandomPort>,
}

impl ResolveSkillCheck {
    pub fn new(sheet: Arc<SkillSheet>, ledger: Arc<RollLedger>, random: Arc<dyn RandomPort>) -> Self {
        Self {
            sheet,
            ledger,
            random,
        }
    }

    pub async fn execute(
        &self,
        user: UserId,
        command: SkillCheckCommand,
    ) -> Result<SkillCheckResponse, SkillCheckError> {
        let subject = self
            .sheet
            .get_check_subject(user, command.character_id, command.skill_id)
            .await?
            .ok_or_else(|| {
                tracing::debug!(
                    user_id = %user,
                    character_id = %command.character_id,
                    skill_id = %command.skill_id,
                    "Skill check subject not found for user"
                );
                SkillCheckError::NotFound
            })?;

        let target = aggregate_target(&TargetInput::from_subject(&subject, command.situational));

        // Committed here; a failure below never leads to a second roll.
        let raw_roll = self.random.roll_percentile();
        let outcome = DegreeOutcome::calculate(target.final_target, raw_roll);

        let entry = NewRollLog {
            user_id: user,
            character_id: subject.character.id,
            skill_id: subject.skill.id,
            notation: skill_check::notation(target.final_target, &subject.skill.name),
            modifiers: target.modifiers.clone(),
            raw_roll,
            final_target: target.final_target,
            degrees_of_success: outcome.degrees_of_success,
            is_critical_success: outcome.is_critical_success,
            is_critical_failure: outcome.is_critical_failure,
            breakdown: skill_check::narrate(&target, raw_roll, &outcome),
        };

        let log = self.ledger.record(entry).await.map_err(|e| {
            tracing::error!(
                error = %e,
                user_id = %user,
                character_id = %subject.character.id,
                skill_id = %subject.skill.id,
                "Failed to record roll log; discarding roll"
            );
            SkillCheckError::AuditWrite(e)
        })?;

        tracing::info!(
            roll_log_id = %log.id,
            user_id = %user,
            character_id = %log.character_id,
            skill_id = %log.skill_id,
            raw_roll = log.raw_roll.value(),
            final_target = log.final_target,
            degrees_of_success = log.degrees_of_success,
            "Skill check recorded"
        );

        Ok(compose(&target, &outcome, &log))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SkillCheckError {
    #[error("Character skill not found")]
    NotFound,
    #[error("Failed to record roll: {0}")]
    AuditWrite(RepoError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
