//! Persistence layer: connection pool, embedded migrations, entity models,
//! repositories, the unit of work, and entity/DTO mapping.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub mod mapping;
pub mod models;
pub mod repositories;
pub mod unit_of_work;

pub use unit_of_work::UnitOfWork;

pub type Db = sqlx::Sqlite;
pub type DbPool = sqlx::SqlitePool;
pub type DbConnection = sqlx::SqliteConnection;

const MAX_CONNECTIONS: u32 = 10;

/// Create a connection pool from a database URL such as `sqlite://corpdir.db`.
///
/// The database file is created if missing and foreign keys are enforced on
/// every connection.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal);

    tracing::debug!(filename = %options.get_filename().display(), "Opening SQLite pool");

    SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations under `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
