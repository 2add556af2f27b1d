//! Persisted user preferences (selected commodity, minimum profit).

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

use crate::domain::app_state::PersistedState;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "IslandTradeScanner";
const APP_NAME: &str = "IslandTradeScanner";
const STATE_FILE: &str = "state.json";

fn state_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(STATE_FILE))
}

/// Best effort: a missing, unreadable or corrupt state file just means the
/// session starts from defaults.
pub fn load_persisted_state() -> Option<PersistedState> {
    let data = fs::read_to_string(state_file()?).ok()?;
    parse_persisted_state(&data)
}

fn parse_persisted_state(data: &str) -> Option<PersistedState> {
    serde_json::from_str(data).ok()
}

/// Write through a sibling temp file and rename, so an interrupted save
/// cannot leave a truncated state file behind.
pub fn save_persisted_state(state: &PersistedState) -> Result<(), PersistSaveError> {
    let path = state_file().ok_or(PersistSaveError::StorageUnavailable)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    let staging = path.with_extension("json.tmp");
    fs::write(&staging, json)?;
    fs::rename(&staging, &path)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
