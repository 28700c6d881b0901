//! Entity modules - Domain capability encapsulation.
//!
//! Each module wraps operations for a domain entity type.
//! They depend on repository ports and provide the building blocks for use cases.

pub mod roll_ledger;
pub mod skill_sheet;

pub use roll_ledger::RollLedger;
pub use skill_sheet::SkillSheet;
