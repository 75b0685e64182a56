use anyhow::Result;
use std::path::PathBuf;

const BOTFLOW_DIR: &str = ".botflow";
const DB_FILE: &str = "botflow.db";

/// Environment variable to override the Botflow directory.
const BOTFLOW_DIR_ENV: &str = "BOTFLOW_DIR";

/// Resolve the Botflow data directory.
/// Priority: BOTFLOW_DIR env var > ~/.botflow/
pub fn resolve_botflow_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(BOTFLOW_DIR_ENV)
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|h| h.join(BOTFLOW_DIR))
        .ok_or_else(|| anyhow::anyhow!("Failed to determine home directory"))
}

/// Ensure the Botflow directory exists and return its path.
pub fn ensure_botflow_dir() -> Result<PathBuf> {
    let dir = resolve_botflow_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the database path: ~/.botflow/botflow.db
pub fn ensure_database_path() -> Result<PathBuf> {
    Ok(ensure_botflow_dir()?.join(DB_FILE))
}

/// Convenience helper returning the database path as a UTF-8 string.
pub fn ensure_database_path_string() -> Result<String> {
    Ok(ensure_database_path()?.to_string_lossy().into_owned())
}
