//! Environment/runtime helpers
//!
//! Sanity checks run before the first database connection.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File path a SQLite URL points at, or `None` for in-memory and non-SQLite URLs.
pub fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    let rest = url.strip_prefix("sqlite://").or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" || path.starts_with("file::memory:") {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Ensure the directory holding a SQLite database file exists.
pub async fn ensure_sqlite_dir(url: &str) -> anyhow::Result<()> {
    let Some(path) = sqlite_file_path(url) else {
        debug!(%url, "no sqlite file to prepare");
        return Ok(());
    };
    let dir = match path.parent() {
        Some(d) if d != Path::new("") => d.to_path_buf(),
        _ => return Ok(()),
    };
    if tokio::fs::metadata(&dir).await.is_err() {
        warn!(dir = %dir.display(), "sqlite data directory missing; creating it");
    }
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    Ok(())
}
