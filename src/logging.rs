use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

const DEFAULT_FILTER: &str = "warn";

/// Logs to stderr; used by the one-shot CLI commands.
pub fn init_stderr() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Stderr)
        .try_init();
}

/// Appends logs to `path`; used while the TUI owns the terminal.
pub fn init_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("create parent directories for log path {}", path.display())
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_secs()
        .try_init()
        .context("install logger")?;
    Ok(())
}
