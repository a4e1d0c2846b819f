//! File-backed logging; the terminal itself is busy drawing the game.

use crate::config::{APP_NAME, Config};
use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

pub fn log_path() -> std::io::Result<PathBuf> {
    let dirs = Config::project_dirs()?;
    Ok(dirs.data_local_dir().join(format!("{APP_NAME}.log")))
}

/// Routes `log` output to the log file. The filter comes from `RUST_LOG`,
/// defaulting to `info`.
pub fn init() -> anyhow::Result<PathBuf> {
    let path = log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("installing logger")?;
    Ok(path)
}
