use dotenvy::dotenv;
use migration::MigratorTrait;
use models::db::{connect_with_config, test_connection, DatabaseConfig};
use tracing::{error, info, warn};
use uuid::Uuid;

fn init_logging(cfg: Option<&configs::LoggingConfig>) {
    // Load .env first so RUST_LOG and DATABASE_URL are visible
    dotenv().ok();
    match cfg {
        Some(c) if c.is_json() => common::utils::logging::init_logging_json(&c.filter),
        Some(c) => common::utils::logging::init_logging_compact(&c.filter),
        None => common::utils::logging::init_logging_default(),
    }
    info!(service = "carstore", event = "logger_init", "tracing subscriber initialized");
}

/// Connect, bring the schema up to date and prove the store answers.
async fn prepare_store(db_cfg: DatabaseConfig) -> anyhow::Result<()> {
    common::env::ensure_sqlite_dir(&db_cfg.url).await?;
    let db = connect_with_config(&db_cfg).await?;

    let pending = migration::Migrator::get_pending_migrations(&db).await?.len();
    migration::Migrator::up(&db, None).await?;
    info!(service = "carstore", event = "migrated", applied = pending, "schema up to date");

    test_connection(&db).await?;
    db.close().await?;
    Ok(())
}

fn main() -> std::process::ExitCode {
    dotenv().ok();
    let app_cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            // reported once logging is up
            eprintln!("config.toml unavailable ({e}); falling back to environment");
            None
        }
    };
    init_logging(app_cfg.as_ref().map(|c| &c.logging));

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "carstore",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let db_cfg = match &app_cfg {
        Some(cfg) => DatabaseConfig::from(&cfg.database),
        None => {
            warn!(service = "carstore", event = "config_fallback", "using DATABASE_URL and defaults");
            DatabaseConfig::from_env()
        }
    };

    let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "carstore", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(service = "carstore", event = "start", %service_id, pid, version, "carstore starting");

    rt.block_on(async move {
        tokio::select! {
            res = prepare_store(db_cfg) => match res {
                Ok(()) => {
                    info!(service = "carstore", event = "ready", %service_id, pid, "car store ready");
                    std::process::ExitCode::SUCCESS
                }
                Err(e) => {
                    error!(service = "carstore", event = "prepare_failed", error = %e, "car store unavailable");
                    std::process::ExitCode::FAILURE
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!(service = "carstore", event = "shutdown_signal", %service_id, pid, "received Ctrl+C, aborting");
                std::process::ExitCode::FAILURE
            }
        }
    })
}
