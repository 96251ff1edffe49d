use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;
use tracing::info;

pub static DATABASE_URL: Lazy<String> = Lazy::new(|| {
    // Load .env if present
    let _ = dotenvy::dotenv();
    env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://cars.db?mode=rwc".to_string())
});

/// Runtime pool settings. Built from `config.toml` or from the environment.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    pub acquire_timeout: Duration,
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::from(&configs::DatabaseConfig::default())
    }
}

impl From<&configs::DatabaseConfig> for DatabaseConfig {
    fn from(c: &configs::DatabaseConfig) -> Self {
        Self {
            url: c.url.clone(),
            max_connections: c.max_connections,
            min_connections: c.min_connections,
            connect_timeout: Duration::from_secs(c.connect_timeout_secs),
            idle_timeout: Duration::from_secs(c.idle_timeout_secs),
            max_lifetime: Duration::from_secs(c.max_lifetime_secs),
            acquire_timeout: Duration::from_secs(c.acquire_timeout_secs),
            sqlx_logging: c.sqlx_logging,
        }
    }
}

impl DatabaseConfig {
    /// Read the `[database]` table of the application config file.
    pub fn from_file() -> anyhow::Result<Self> {
        let cfg = configs::AppConfig::load_and_validate()?;
        Ok(Self::from(&cfg.database))
    }

    /// Defaults plus `DATABASE_URL` and `DB_MAX_CONNECTIONS` / `DB_MIN_CONNECTIONS`.
    pub fn from_env() -> Self {
        let mut cfg = Self { url: DATABASE_URL.clone(), ..Self::default() };
        if let Some(n) = env::var("DB_MAX_CONNECTIONS").ok().and_then(|v| v.parse().ok()) {
            cfg.max_connections = n;
        }
        if let Some(n) = env::var("DB_MIN_CONNECTIONS").ok().and_then(|v| v.parse().ok()) {
            cfg.min_connections = n;
        }
        cfg
    }

    pub fn is_in_memory(&self) -> bool {
        let lower = self.url.to_lowercase();
        lower.starts_with("sqlite:") && lower.contains(":memory:")
    }

    /// Pool bounds actually handed to the driver as `(max, min)`.
    ///
    /// Every pooled connection to `sqlite::memory:` opens its own empty database, so those pools hold one.
    pub fn effective_pool_bounds(&self) -> (u32, u32) {
        if self.is_in_memory() { (1, 1) } else { (self.max_connections, self.min_connections) }
    }

    fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url.clone());
        let (max, min) = self.effective_pool_bounds();
        opt.max_connections(max)
            .min_connections(min)
            .connect_timeout(self.connect_timeout)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .sqlx_logging(self.sqlx_logging);
        opt
    }
}

pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    connect_with_config(&DatabaseConfig::from_env()).await
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(cfg.connect_options()).await?;
    let (max_connections, min_connections) = cfg.effective_pool_bounds();
    info!(backend = ?db.get_database_backend(), max_connections, min_connections, "database_connected");
    Ok(db)
}

/// Round-trip a trivial query to prove the pool can hand out a working connection.
pub async fn test_connection(db: &DatabaseConnection) -> anyhow::Result<()> {
    let backend = db.get_database_backend();
    let row = db
        .query_one(Statement::from_string(backend, "SELECT 1 AS ok".to_string()))
        .await?
        .ok_or_else(|| anyhow::anyhow!("SELECT 1 returned no row"))?;
    let ok: i32 = row.try_get("", "ok")?;
    anyhow::ensure!(ok == 1, "SELECT 1 returned {ok}");
    Ok(())
}
