pub mod director;
pub mod error;
pub mod genre;
pub mod movie;
mod reference;

use std::str::FromStr as _;

pub use error::Error;
pub use sqlx::Error as SqlxError;
use sqlx::{
    migrate::MigrateDatabase as _,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tracing::{debug, info};

use crate::error::Result;

pub type ChosenDB = sqlx::Sqlite;
pub type Pool = sqlx::Pool<ChosenDB>;

pub(crate) static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");

/// Opens the catalog database, creating it on first use, and brings its schema up to date.
pub async fn new_pool(database_url: &str) -> Result<Pool, Error> {
    if !ChosenDB::database_exists(database_url).await? {
        ChosenDB::create_database(database_url).await?;
        info!("Created database {database_url}");
    }
    let options = SqliteConnectOptions::from_str(database_url)?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(50)
        .connect_with(options)
        .await?;
    migrate(&pool).await?;
    Ok(pool)
}

pub async fn migrate(pool: &Pool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    debug!("Database schema is up to date");
    Ok(())
}

/// Runs a batch of SQL statements (typically reference data inserts) in one transaction.
pub async fn seed(pool: &Pool, sql: &str) -> Result<u64> {
    let mut transaction = pool.begin().await?;
    // Call `Executor::execute` directly: it returns a boxed `Send` future, whereas the
    // `RawSql::execute` async wrapper trips a higher-ranked lifetime error under `tokio::spawn`.
    let affected = sqlx::Executor::execute(&mut *transaction, sqlx::raw_sql(sql))
        .await?
        .rows_affected();
    transaction.commit().await?;
    debug!("Seed inserted {affected} rows");
    Ok(affected)
}
