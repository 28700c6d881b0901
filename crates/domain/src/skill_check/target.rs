//! Target aggregation - characteristic + level + situational + untrained penalty.

use serde::{Deserialize, Serialize};

use crate::entities::SkillCheckSubject;
use crate::value_objects::{
    AppliedModifier, Characteristic, Characteristics, ModifierKind, ModifierLevel, Situational,
    SkillTier,
};

/// Fixed penalty for attempting a basic skill without training.
pub const UNTRAINED_PENALTY: i32 = -20;

/// Everything the target number depends on. Nothing else feeds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetInput {
    pub characteristics: Characteristics,
    pub governing_characteristic: Characteristic,
    pub modifier_level: ModifierLevel,
    pub is_known: bool,
    pub tier: SkillTier,
    pub situational: Situational,
}

impl TargetInput {
    pub fn from_subject(subject: &SkillCheckSubject, situational: Situational) -> Self {
        Self {
            characteristics: subject.character.characteristics,
            governing_characteristic: subject.governing_characteristic(),
            modifier_level: subject.character_skill.modifier_level,
            is_known: subject.character_skill.is_known,
            tier: subject.skill.tier,
            situational,
        }
    }

    fn is_untrained(&self) -> bool {
        self.tier.allows_untrained_use() && !self.is_known
    }
}

/// The final target and the ordered components that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetBreakdown {
    pub final_target: i32,
    pub modifiers: Vec<AppliedModifier>,
}

impl TargetBreakdown {
    /// Value contributed by one kind of modifier, or 0 when it was not applied.
    pub fn component(&self, kind: ModifierKind) -> i32 {
        self.modifiers
            .iter()
            .filter(|m| m.kind == kind)
            .map(|m| m.value)
            .sum()
    }
}

/// Build the target number for a check.
///
/// Components are listed in a fixed order (base, level, situational,
/// untrained). `level` is always present, `situational` only when nonzero
/// and `untrained` only for unknown basic skills. The target is not clamped
/// to the percentile range, but the sum saturates at the `i32` bounds.
pub fn aggregate_target(input: &TargetInput) -> TargetBreakdown {
    let governing = input.governing_characteristic;
    let mut modifiers = Vec::with_capacity(4);

    modifiers.push(AppliedModifier::new(
        ModifierKind::Base,
        input.characteristics.get(governing),
        governing.display_name(),
    ));

    modifiers.push(AppliedModifier::new(
        ModifierKind::Level,
        input.modifier_level.bonus(),
        format!("Level {}", input.modifier_level),
    ));

    if input.situational.value != 0 {
        modifiers.push(AppliedModifier::new(
            ModifierKind::Situational,
            input.situational.value,
            input.situational.reason_or_default(),
        ));
    }

    if input.is_untrained() {
        modifiers.push(AppliedModifier::new(
            ModifierKind::Untrained,
            UNTRAINED_PENALTY,
            "Untrained",
        ));
    }

    let final_target = modifiers
        .iter()
        .fold(0i32, |total, m| total.saturating_add(m.value));

    TargetBreakdown {
        final_target,
        modifiers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(tier: SkillTier, is_known: bool, level: u8, situational: i32) -> TargetInput {
        TargetInput {
            characteristics: Characteristics::default()
                .with(Characteristic::Agility, 35)
                .with(Characteristic::Fellowship, 50),
            governing_characteristic: Characteristic::Agility,
            modifier_level: ModifierLevel::new(level).unwrap(),
            is_known,
            tier,
            situational: Situational::new(situational, Some("Slippery deck".into())),
        }
    }

    fn kinds(breakdown: &TargetBreakdown) -> Vec<ModifierKind> {
        breakdown.modifiers.iter().map(|m| m.kind).collect()
    }

    #[test]
    fn trained_skill_without_situational() {
        let breakdown = aggregate_target(&input(SkillTier::Trained, true, 2, 0));

        assert_eq!(breakdown.final_target, 45);
        assert_eq!(kinds(&breakdown), vec![ModifierKind::Base, ModifierKind::Level]);
        assert_eq!(breakdown.modifiers[0].reason, "Agility");
        assert_eq!(breakdown.modifiers[1].reason, "Level 2");
        assert_eq!(breakdown.modifiers[1].value, 10);
    }

    #[test]
    fn components_keep_fixed_order() {
        let breakdown = aggregate_target(&input(SkillTier::Basic, false, 3, -10));

        assert_eq!(
            kinds(&breakdown),
            vec![
                ModifierKind::Base,
                ModifierKind::Level,
                ModifierKind::Situational,
                ModifierKind::Untrained,
            ]
        );
        // 35 + 20 - 10 - 20
        assert_eq!(breakdown.final_target, 25);
        assert_eq!(breakdown.modifiers[2].reason, "Slippery deck");
    }

    #[test]
    fn level_one_still_listed_with_zero_bonus() {
        let breakdown = aggregate_target(&input(SkillTier::Trained, false, 1, 0));
        assert_eq!(breakdown.component(ModifierKind::Level), 0);
        assert_eq!(breakdown.modifiers.len(), 2);
    }

    #[test]
    fn untrained_penalty_only_for_unknown_basic() {
        for (tier, known, expected) in [
            (SkillTier::Basic, false, true),
            (SkillTier::Basic, true, false),
            (SkillTier::Trained, false, false),
            (SkillTier::Trained, true, false),
            (SkillTier::Specialist, false, false),
            (SkillTier::Specialist, true, false),
        ] {
            let breakdown = aggregate_target(&input(tier, known, 1, 0));
            let penalties = breakdown
                .modifiers
                .iter()
                .filter(|m| m.kind == ModifierKind::Untrained)
                .count();
            assert_eq!(penalties, usize::from(expected), "{tier:?} known={known}");
            if expected {
                assert_eq!(breakdown.component(ModifierKind::Untrained), UNTRAINED_PENALTY);
            }
        }
    }

    #[test]
    fn final_target_matches_closed_form() {
        for tier in [SkillTier::Basic, SkillTier::Trained, SkillTier::Specialist] {
            for known in [false, true] {
                for level in 1..=3u8 {
                    for situational in [-30, -10, 0, 10, 30] {
                        let breakdown = aggregate_target(&input(tier, known, level, situational));
                        let penalty = if known || tier != SkillTier::Basic { 0 } else { -20 };
                        let expected =
                            35 + (i32::from(level) - 1) * 10 + situational + penalty;
                        assert_eq!(breakdown.final_target, expected);
                    }
                }
            }
        }
    }

    #[test]
    fn target_is_not_clamped() {
        let mut low = input(SkillTier::Basic, false, 1, -40);
        low.characteristics = low.characteristics.with(Characteristic::Agility, 5);
        assert_eq!(aggregate_target(&low).final_target, -55);

        let mut high = input(SkillTier::Trained, true, 3, 60);
        high.characteristics = high.characteristics.with(Characteristic::Agility, 70);
        assert_eq!(aggregate_target(&high).final_target, 150);
    }

    #[test]
    fn extreme_situational_saturates_instead_of_wrapping() {
        let high = aggregate_target(&input(SkillTier::Trained, true, 3, i32::MAX));
        assert_eq!(high.final_target, i32::MAX);
        assert_eq!(high.component(ModifierKind::Situational), i32::MAX);

        let low = aggregate_target(&input(SkillTier::Basic, false, 1, i32::MIN));
        assert_eq!(low.final_target, i32::MIN);
    }

    #[test]
    fn governing_characteristic_selects_base() {
        let mut social = input(SkillTier::Trained, true, 1, 0);
        social.governing_characteristic = Characteristic::Fellowship;
        let breakdown = aggregate_target(&social);
        assert_eq!(breakdown.component(ModifierKind::Base), 50);
        assert_eq!(breakdown.modifiers[0].reason, "Fellowship");
    }
}
