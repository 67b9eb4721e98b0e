mod config;
mod snapshot;

pub use config::ProgramConfig;
pub use snapshot::{JsonSnapshotStore, MemorySnapshotStore, ProgramState, SnapshotStore};

use std::path::PathBuf;

/// Returns `~/.config/dosetrack[-dev]/` based on DOSETRACK_ENV.
///
/// Set DOSETRACK_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DOSETRACK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("dosetrack-dev")
    } else {
        base_dir.join("dosetrack")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
