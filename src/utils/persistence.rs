//! JSON file helpers for the `~/.cyber-typer/` directory.
//!
//! Only configuration is ever read from here; game state is never written.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".cyber-typer";

/// Get the ~/.cyber-typer/ directory path, creating it if needed.
pub fn app_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(APP_DIR);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.cyber-typer/.
pub fn app_path(filename: &str) -> io::Result<PathBuf> {
    Ok(app_dir()?.join(filename))
}

/// Parse a JSON file, returning `None` if it is missing or invalid.
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    let json = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring invalid {}: {}", path.display(), e);
            None
        }
    }
}

/// Load a JSON file from ~/.cyber-typer/, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    match app_path(filename) {
        Ok(path) => load_json(&path).unwrap_or_default(),
        Err(_) => T::default(),
    }
}
