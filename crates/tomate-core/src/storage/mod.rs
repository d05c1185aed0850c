//! Snapshot persistence.

mod snapshot;

pub use snapshot::{Snapshot, SnapshotStore};

use std::path::PathBuf;

/// Returns `~/.config/tomate[-dev]/` based on TOMATE_ENV.
///
/// Set TOMATE_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TOMATE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("tomate-dev")
    } else {
        base_dir.join("tomate")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
