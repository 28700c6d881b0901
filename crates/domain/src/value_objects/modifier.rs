//! Target modifiers as recorded in the breakdown and the roll log.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Which rule produced a modifier. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKind {
    Base,
    Level,
    Situational,
    Untrained,
}

impl ModifierKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Level => "level",
            Self::Situational => "situational",
            Self::Untrained => "untrained",
        }
    }
}

impl fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModifierKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base" => Ok(Self::Base),
            "level" => Ok(Self::Level),
            "situational" => Ok(Self::Situational),
            "untrained" => Ok(Self::Untrained),
            _ => Err(DomainError::parse(format!("Unknown modifier type: {}", s))),
        }
    }
}

/// One labelled component of a final target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedModifier {
    #[serde(rename = "type")]
    pub kind: ModifierKind,
    pub value: i32,
    pub reason: String,
}

impl AppliedModifier {
    pub fn new(kind: ModifierKind, value: i32, reason: impl Into<String>) -> Self {
        Self {
            kind,
            value,
            reason: reason.into(),
        }
    }
}

/// A caller-supplied situational modifier.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Situational {
    pub value: i32,
    pub reason: Option<String>,
}

impl Situational {
    pub const DEFAULT_REASON: &'static str = "Situational modifier";

    pub fn new(value: i32, reason: Option<String>) -> Self {
        Self { value, reason }
    }

    pub fn none() -> Self {
        Self::default()
    }

    /// Blank reasons are treated as absent.
    pub fn reason_or_default(&self) -> &str {
        self.reason
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(Self::DEFAULT_REASON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applied_modifier_wire_shape() {
        let modifier = AppliedModifier::new(ModifierKind::Untrained, -20, "Untrained");
        let json = serde_json::to_value(&modifier).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "untrained", "value": -20, "reason": "Untrained" })
        );
    }

    #[test]
    fn test_kind_order_matches_breakdown_order() {
        assert!(ModifierKind::Base < ModifierKind::Level);
        assert!(ModifierKind::Level < ModifierKind::Situational);
        assert!(ModifierKind::Situational < ModifierKind::Untrained);
    }

    #[test]
    fn test_situational_reason_fallback() {
        assert_eq!(
            Situational::new(10, Some("High ground".into())).reason_or_default(),
            "High ground"
        );
        assert_eq!(
            Situational::new(10, Some("   ".into())).reason_or_default(),
            Situational::DEFAULT_REASON
        );
        assert_eq!(
            Situational::new(-10, None).reason_or_default(),
            Situational::DEFAULT_REASON
        );
    }
}
