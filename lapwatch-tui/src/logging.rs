use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub fn log_path() -> Result<PathBuf> {
    Ok(dirs::cache_dir()
        .context("Cannot determine cache directory")?
        .join("lapwatch")
        .join("lapwatch.log"))
}

fn open_log_file() -> Result<(File, PathBuf)> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file at {}", path.display()))?;
    Ok((file, path))
}

/// Send tracing output to a log file; the terminal belongs to the UI.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`. When the file can't be
/// opened the error is returned and the caller runs without logging.
pub fn init() -> Result<PathBuf> {
    let (file, path) = open_log_file()?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;

    Ok(path)
}
