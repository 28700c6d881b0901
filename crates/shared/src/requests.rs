//! Request bodies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /api/skill-checks`.
///
/// The ids are optional at the wire level so a missing field is reported as a
/// bad request by [`SkillCheckRequest::validate`] instead of a generic
/// deserialization failure. There is deliberately no roll field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCheckRequest {
    #[serde(default)]
    pub character_id: Option<Uuid>,
    #[serde(default)]
    pub skill_id: Option<Uuid>,
    #[serde(default)]
    pub modifier: Option<i32>,
    #[serde(default)]
    pub modifier_reason: Option<String>,
}

/// Largest situational modifier magnitude a caller may send.
pub const MAX_SITUATIONAL_MODIFIER: i32 = 1000;

/// A request whose required fields are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSkillCheckRequest {
    pub character_id: Uuid,
    pub skill_id: Uuid,
    pub modifier: i32,
    pub modifier_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("modifier must be between -{max} and {max}, got {0}", max = MAX_SITUATIONAL_MODIFIER)]
    ModifierOutOfRange(i32),
}

impl SkillCheckRequest {
    pub fn validate(self) -> Result<ValidSkillCheckRequest, RequestError> {
        let character_id = self
            .character_id
            .ok_or(RequestError::MissingField("character_id"))?;
        let skill_id = self.skill_id.ok_or(RequestError::MissingField("skill_id"))?;

        let modifier = self.modifier.unwrap_or(0);
        if !(-MAX_SITUATIONAL_MODIFIER..=MAX_SITUATIONAL_MODIFIER).contains(&modifier) {
            return Err(RequestError::ModifierOutOfRange(modifier));
        }

        Ok(ValidSkillCheckRequest {
            character_id,
            skill_id,
            modifier,
            modifier_reason: self.modifier_reason,
        })
    }
}
