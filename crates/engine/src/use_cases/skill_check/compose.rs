//! Reshape a recorded check into the public response.

use grimroll_domain::{AppliedModifier, DegreeOutcome, ModifierKind, RollLog, TargetBreakdown};
use grimroll_shared::{ModifierData, RollBreakdownData, SkillCheckResponse};

/// Build the response for a check that has already been logged.
///
/// Every number comes from its inputs; nothing is recomputed here.
pub fn compose(
    target: &TargetBreakdown,
    outcome: &DegreeOutcome,
    log: &RollLog,
) -> SkillCheckResponse {
    let total = target.final_target;
    let result = log.raw_roll.value();

    SkillCheckResponse {
        success: outcome.success,
        raw_roll: result,
        final_target: total,
        degrees_of_success: outcome.degrees_of_success,
        is_critical_success: outcome.is_critical_success,
        is_critical_failure: outcome.is_critical_failure,
        modifiers: target.modifiers.iter().map(modifier_data).collect(),
        roll_log_id: log.id.to_uuid(),
        timestamp: log.created_at,
        breakdown: RollBreakdownData {
            base: target.component(ModifierKind::Base),
            level_bonus: target.component(ModifierKind::Level),
            untrained: target.component(ModifierKind::Untrained),
            situational: target.component(ModifierKind::Situational),
            total,
            result,
            difference: total.abs_diff(result),
        },
    }
}

pub(crate) fn modifier_data(modifier: &AppliedModifier) -> ModifierData {
    ModifierData {
        kind: modifier.kind.as_str().to_string(),
        value: modifier.value,
        reason: modifier.reason.clone(),
    }
}
