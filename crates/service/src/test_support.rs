#![cfg(test)]
use std::sync::Arc;

use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};

use crate::car::repo::SeaOrmCarRepository;

/// Fresh in-memory SQLite database with all migrations applied. Nothing is shared between tests.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub async fn seaorm_repo() -> Result<Arc<SeaOrmCarRepository>, anyhow::Error> {
    Ok(Arc::new(SeaOrmCarRepository::new(get_db().await?)))
}
