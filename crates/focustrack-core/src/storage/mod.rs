pub mod database;
pub mod store;

pub use database::Database;
pub use store::{KeyValueStore, MemoryStore};

use std::path::PathBuf;

use crate::error::StoreError;

/// Returns `~/.config/focustrack[-dev]/` based on FOCUSTRACK_ENV.
///
/// Set FOCUSTRACK_ENV=dev to use the development data directory, or
/// FOCUSTRACK_DATA_DIR to point somewhere else entirely (tests use this).
///
/// # Errors
/// Returns an error if creating the data directory fails.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let dir = if let Ok(override_dir) = std::env::var("FOCUSTRACK_DATA_DIR") {
        PathBuf::from(override_dir)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");

        let env = std::env::var("FOCUSTRACK_ENV").unwrap_or_else(|_| "production".to_string());

        if env == "dev" {
            base_dir.join("focustrack-dev")
        } else {
            base_dir.join("focustrack")
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| StoreError::QueryFailed(e.to_string()))?;
    Ok(dir)
}
