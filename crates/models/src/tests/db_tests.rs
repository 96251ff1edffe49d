use crate::db::{connect_with_config, test_connection, DatabaseConfig};
use anyhow::Result;
use std::time::Duration;

fn memory_config() -> DatabaseConfig {
    DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() }
}

#[test]
fn defaults_follow_config_crate() {
    let cfg = DatabaseConfig::default();
    assert_eq!(cfg.max_connections, 10);
    assert_eq!(cfg.min_connections, 1);
    assert_eq!(cfg.acquire_timeout, Duration::from_secs(30));
    assert!(!cfg.sqlx_logging);
}

#[test]
fn detects_in_memory_urls() {
    assert!(memory_config().is_in_memory());
    let file = DatabaseConfig { url: "sqlite://cars.db?mode=rwc".into(), ..DatabaseConfig::default() };
    assert!(!file.is_in_memory());
}

#[test]
fn in_memory_pool_bounds_collapse_to_one() {
    let mut cfg = memory_config();
    cfg.max_connections = 8;
    cfg.min_connections = 2;
    assert_eq!(cfg.effective_pool_bounds(), (1, 1));

    cfg.url = "postgres://localhost/cars".into();
    assert_eq!(cfg.effective_pool_bounds(), (8, 2));
}

/// Test basic database connection
#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    let db = connect_with_config(&memory_config()).await?;
    test_connection(&db).await?;
    Ok(())
}

/// Schema created through one unit of work must be visible to the next one.
#[tokio::test]
async fn in_memory_pool_shares_one_database() -> Result<()> {
    use migration::MigratorTrait;
    use sea_orm::EntityTrait;

    let mut cfg = memory_config();
    cfg.max_connections = 8;
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;

    let rows = crate::car::Entity::find().all(&db).await?;
    assert!(rows.is_empty());
    Ok(())
}
