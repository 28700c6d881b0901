//! SQLite-backed storage for character sheets and the roll log.

mod character_skill_repo;
mod roll_log_repo;
mod schema;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::infrastructure::ports::RepoError;

pub use character_skill_repo::SqliteCharacterSkillRepo;
pub use roll_log_repo::SqliteRollLogRepo;
pub use schema::ensure_schema;

/// Open (creating if needed) the database and make sure the schema exists.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, RepoError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| RepoError::database("connect", e))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(|e| RepoError::database("connect", e))?;

    ensure_schema(&pool).await?;
    Ok(pool)
}

/// Read a TEXT column holding a UUID.
fn uuid_column(row: &sqlx::sqlite::SqliteRow, name: &str) -> Result<Uuid, RepoError> {
    let raw: String = column(row, name)?;
    Uuid::parse_str(&raw).map_err(|e| RepoError::serialization(format!("{}: {}", name, e)))
}

/// Read any other column, tagging decode failures with the column name.
fn column<'r, T>(row: &'r sqlx::sqlite::SqliteRow, name: &str) -> Result<T, RepoError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(name)
        .map_err(|e| RepoError::serialization(format!("{}: {}", name, e)))
}
