use sqlx::{Pool, Postgres};

use crate::application::ports::insert_error::InsertError;

pub type PgPool = Pool<Postgres>;

pub async fn connect_pool(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

pub async fn migrate(pool: &PgPool) -> anyhow::Result<()> {
    // Uses compile-time embedded migrations under ./migrations
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Unique violations become `InsertError::Conflict` tagged with the constraint name.
pub(crate) fn classify_insert_error(err: sqlx::Error) -> InsertError {
    if let Some(db) = err.as_database_error() {
        if db.is_unique_violation() {
            return InsertError::conflict(db.constraint().unwrap_or_default());
        }
    }
    InsertError::Storage(err.into())
}

pub mod repositories;
