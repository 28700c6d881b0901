//! Skill check rules: target aggregation, degree calculation and the
//! human-readable strings written to the roll log.

mod degrees;
mod target;

pub use degrees::DegreeOutcome;
pub use target::{aggregate_target, TargetBreakdown, TargetInput, UNTRAINED_PENALTY};

use crate::value_objects::{ModifierKind, PercentileRoll};

/// Dice notation recorded with each roll, e.g. `1d100 vs 45 (Dodge)`.
pub fn notation(final_target: i32, skill_name: &str) -> String {
    format!("1d100 vs {} ({})", final_target, skill_name)
}

/// Narrative breakdown recorded with each roll.
///
/// ```text
/// Agility 35 + Level 2 (+10) + Untrained (-20) = 25; rolled 42: failure, 2 degrees
/// ```
pub fn narrate(breakdown: &TargetBreakdown, roll: PercentileRoll, outcome: &DegreeOutcome) -> String {
    let mut parts = Vec::with_capacity(breakdown.modifiers.len());
    for modifier in &breakdown.modifiers {
        match modifier.kind {
            ModifierKind::Base => parts.push(format!("{} {}", modifier.reason, modifier.value)),
            _ => parts.push(format!("{} ({:+})", modifier.reason, modifier.value)),
        }
    }

    let verdict = if outcome.success { "success" } else { "failure" };
    let unit = if outcome.magnitude() == 1 { "degree" } else { "degrees" };
    let mut text = format!(
        "{} = {}; rolled {}: {}, {} {}",
        parts.join(" + "),
        breakdown.final_target,
        roll,
        verdict,
        outcome.magnitude(),
        unit
    );

    if outcome.is_critical_success {
        text.push_str(" (critical success)");
    } else if outcome.is_critical_failure {
        text.push_str(" (critical failure)");
    }
    text
}
