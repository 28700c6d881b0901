//! Application state and composition.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::entities::{RollLedger, SkillSheet};
use crate::infrastructure::{
    clock::{SecureRandom, SystemClock},
    ports::{CharacterSkillRepo, ClockPort, RandomPort, RollLogRepo},
    sqlite::{SqliteCharacterSkillRepo, SqliteRollLogRepo},
};
use crate::use_cases;

/// Main application state.
///
/// Holds all use cases. Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub skill_check: use_cases::SkillCheckUseCases,
    pub roll_log: use_cases::RollLogUseCases,
}

impl App {
    /// Wire the production adapters: SQLite, the system clock and the OS CSPRNG.
    pub fn new(pool: SqlitePool) -> Self {
        Self::from_ports(
            Arc::new(SqliteCharacterSkillRepo::new(pool.clone())),
            Arc::new(SqliteRollLogRepo::new(pool)),
            Arc::new(SystemClock::new()),
            Arc::new(SecureRandom::new()),
        )
    }

    /// Create an App from explicit port implementations.
    pub fn from_ports(
        character_skill_repo: Arc<dyn CharacterSkillRepo>,
        roll_log_repo: Arc<dyn RollLogRepo>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let sheet = Arc::new(SkillSheet::new(character_skill_repo));
        let ledger = Arc::new(RollLedger::new(roll_log_repo, clock));

        let skill_check = use_cases::SkillCheckUseCases::new(Arc::new(
            use_cases::skill_check::ResolveSkillCheck::new(sheet, ledger.clone(), random),
        ));
        let roll_log = use_cases::RollLogUseCases::new(Arc::new(
            use_cases::roll_log::RollHistory::new(ledger),
        ));

        Self {
            use_cases: UseCases {
                skill_check,
                roll_log,
            },
        }
    }
}
