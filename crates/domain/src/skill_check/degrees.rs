//! Degrees of success and failure.
//!
//! The magnitude is the gap between the tens digits of target and roll, plus
//! one. Natural 01 and 100 set the critical flags; they flip the reported
//! outcome but never the degree count, which always follows the raw
//! comparison. A roll of 01 against a negative target is therefore a
//! success with negative degrees.

use serde::{Deserialize, Serialize};

use crate::value_objects::PercentileRoll;

/// Outcome of comparing one roll against one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeOutcome {
    pub success: bool,
    /// Positive for degrees of success, negative for degrees of failure.
    pub degrees_of_success: i32,
    pub is_critical_success: bool,
    pub is_critical_failure: bool,
}

impl DegreeOutcome {
    pub fn calculate(final_target: i32, raw_roll: PercentileRoll) -> Self {
        let roll = raw_roll.value();
        let roll_tens = raw_roll.tens();
        let target_tens = final_target.div_euclid(10);
        let passed = roll <= final_target;

        let degrees_of_success = if passed {
            1 + (target_tens - roll_tens).max(0)
        } else {
            -(1 + (roll_tens - target_tens).max(0))
        };

        let is_critical_success = raw_roll.is_auto_success();
        let is_critical_failure = raw_roll.is_auto_failure();

        Self {
            success: passed || is_critical_success,
            degrees_of_success,
            is_critical_success,
            is_critical_failure,
        }
    }

    /// Unsigned number of degrees, for display.
    pub fn magnitude(&self) -> u32 {
        self.degrees_of_success.unsigned_abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(target: i32, roll: i32) -> DegreeOutcome {
        DegreeOutcome::calculate(target, PercentileRoll::new(roll).unwrap())
    }

    #[test]
    fn worked_examples() {
        let cases = [
            (50, 50, true, 1),
            (50, 42, true, 2),
            (50, 65, false, -2),
            (35, 35, true, 1),
            (10, 55, false, -5),
        ];
        for (target, roll, success, degrees) in cases {
            let result = outcome(target, roll);
            assert_eq!(result.success, success, "target={target} roll={roll}");
            assert_eq!(result.degrees_of_success, degrees, "target={target} roll={roll}");
        }
    }

    #[test]
    fn same_tens_digit_is_one_degree_either_way() {
        assert_eq!(outcome(47, 41).degrees_of_success, 1);
        assert_eq!(outcome(41, 47).degrees_of_success, -1);
    }

    #[test]
    fn natural_one_is_critical_success_regardless_of_target() {
        for target in [-40, 0, 1, 50, 150] {
            let result = outcome(target, 1);
            assert!(result.is_critical_success, "target={target}");
            assert!(!result.is_critical_failure);
            assert!(result.success);
        }
    }

    #[test]
    fn natural_hundred_is_critical_failure_regardless_of_target() {
        for target in [-40, 50, 100, 150] {
            let result = outcome(target, 100);
            assert!(result.is_critical_failure, "target={target}");
            assert!(!result.is_critical_success);
        }
    }

    #[test]
    fn hundred_against_high_target_still_reports_success() {
        // Only the critical-success flag overrides the boolean.
        let result = outcome(120, 100);
        assert!(result.success);
        assert!(result.is_critical_failure);
        assert_eq!(result.degrees_of_success, 1 + (12 - 10));
    }

    #[test]
    fn natural_one_against_negative_target_keeps_negative_degrees() {
        // floor(-15 / 10) = -2, so -(1 + (0 - -2)) = -3
        let result = outcome(-15, 1);
        assert!(result.success);
        assert_eq!(result.degrees_of_success, -3);
        assert_eq!(result.magnitude(), 3);
    }

    #[test]
    fn negative_targets_use_floor_division() {
        assert_eq!(outcome(-1, 5).degrees_of_success, -2);
        assert_eq!(outcome(-10, 5).degrees_of_success, -2);
        assert_eq!(outcome(-11, 5).degrees_of_success, -3);
    }

    #[test]
    fn degrees_are_never_zero() {
        for target in -30..=130 {
            for roll in 1..=100 {
                assert_ne!(outcome(target, roll).degrees_of_success, 0);
            }
        }
    }
}
