//! Table definitions.
//!
//! Characters and skills are written by the provisioning service; this
//! process only reads them. `roll_logs` is append-only and the triggers below
//! make the database enforce that too.

use sqlx::SqlitePool;

use crate::infrastructure::ports::RepoError;

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS characters (
        id TEXT PRIMARY KEY,
        owner_id TEXT NOT NULL,
        name TEXT NOT NULL,
        weapon_skill INTEGER NOT NULL DEFAULT 0,
        ballistic_skill INTEGER NOT NULL DEFAULT 0,
        strength INTEGER NOT NULL DEFAULT 0,
        toughness INTEGER NOT NULL DEFAULT 0,
        agility INTEGER NOT NULL DEFAULT 0,
        intelligence INTEGER NOT NULL DEFAULT 0,
        perception INTEGER NOT NULL DEFAULT 0,
        willpower INTEGER NOT NULL DEFAULT 0,
        fellowship INTEGER NOT NULL DEFAULT 0,
        influence INTEGER NOT NULL DEFAULT 0
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_characters_owner ON characters (owner_id)",
    r#"
    CREATE TABLE IF NOT EXISTS main_skills (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        governing_characteristic TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS skills (
        id TEXT PRIMARY KEY,
        main_skill_id TEXT NOT NULL REFERENCES main_skills (id),
        name TEXT NOT NULL,
        tier TEXT NOT NULL CHECK (tier IN ('basic', 'trained', 'specialist'))
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS character_skills (
        character_id TEXT NOT NULL REFERENCES characters (id),
        skill_id TEXT NOT NULL REFERENCES skills (id),
        is_known INTEGER NOT NULL DEFAULT 0,
        modifier_level INTEGER NOT NULL DEFAULT 1 CHECK (modifier_level BETWEEN 1 AND 3),
        PRIMARY KEY (character_id, skill_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS roll_logs (
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        character_id TEXT NOT NULL,
        skill_id TEXT NOT NULL,
        notation TEXT NOT NULL,
        modifiers_json TEXT NOT NULL,
        raw_roll INTEGER NOT NULL CHECK (raw_roll BETWEEN 1 AND 100),
        final_target INTEGER NOT NULL,
        degrees_of_success INTEGER NOT NULL,
        is_critical_success INTEGER NOT NULL,
        is_critical_failure INTEGER NOT NULL,
        breakdown TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_roll_logs_character ON roll_logs (character_id, created_at)",
    r#"
    CREATE TRIGGER IF NOT EXISTS roll_logs_no_update
    BEFORE UPDATE ON roll_logs
    BEGIN
        SELECT RAISE(ABORT, 'roll_logs is append-only');
    END
    "#,
    r#"
    CREATE TRIGGER IF NOT EXISTS roll_logs_no_delete
    BEFORE DELETE ON roll_logs
    BEGIN
        SELECT RAISE(ABORT, 'roll_logs is append-only');
    END
    "#,
];

/// Create tables, indexes and triggers if they don't exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), RepoError> {
    for statement in STATEMENTS {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| RepoError::database("schema", e))?;
    }
    tracing::debug!(statements = STATEMENTS.len(), "SQLite schema ensured");
    Ok(())
}
