//! File logging
//!
//! The terminal belongs to the dialog, so log output goes to
//! `<state dir>/setcolor/setcolor.log` (cache dir where there is no state dir).
//! The filter comes from `SETCOLOR_LOG`, then `log_level` in the config.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

pub const LOG_ENV: &str = "SETCOLOR_LOG";
const LOG_FILE: &str = "setcolor.log";
const DEFAULT_FILTER: &str = "info";

/// Directory the log file is written to
pub fn log_dir() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .map(|dir| dir.join("setcolor"))
}

/// Filter from the environment, else the config, else `info`
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(config.log_level.as_deref().unwrap_or(DEFAULT_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// Keep the returned guard alive until exit so buffered lines get flushed.
/// Returns `None` when there is nowhere to write.
pub fn init(config: &Config) -> Option<WorkerGuard> {
    let dir = log_dir()?;
    if let Err(err) = std::fs::create_dir_all(&dir) {
        eprintln!("setcolor: logging disabled, cannot create {}: {}", dir.display(), err);
        return None;
    }

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init();

    installed.ok().map(|_| guard)
}
