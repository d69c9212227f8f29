//! File logging for the terminal binary.
//!
//! The game owns the terminal in raw mode, so log lines go to
//! `~/.cyber-typer/cyber-typer.log` instead of stderr. The filter is read from
//! `CYBER_TYPER_LOG` (env_logger syntax) and defaults to `warn`.

use super::persistence::app_path;
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::path::PathBuf;

pub const LOG_FILE: &str = "cyber-typer.log";
pub const LOG_ENV: &str = "CYBER_TYPER_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Install the global logger. Returns the log path, or `None` if logging is
/// unavailable (no home directory, unwritable file, logger already set).
pub fn init_file_logger() -> Option<PathBuf> {
    let path = app_path(LOG_FILE).ok()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    Builder::from_env(Env::new().filter_or(LOG_ENV, DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .ok()?;

    Some(path)
}
