//! UI state persisted between sessions.
//!
//! Only the exploration group selection survives a restart; the story
//! cursor always starts back at the first scene.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use pricestory_core::controller::NavEvent;

use crate::app::AppState;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersistedState {
    pub selected_group: Option<String>,
}

/// Load persisted state; any failure yields the default silently.
pub fn load(path: &Path) -> PersistedState {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|text| serde_json::from_str(&text).ok())
        .unwrap_or_default()
}

pub fn save(path: &Path, state: &PersistedState) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, json)
}

pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        selected_group: Some(app.controller.selected_group().to_string()),
    }
}

pub fn apply(app: &mut AppState, state: PersistedState) {
    if let Some(group) = state.selected_group {
        app.controller.apply(NavEvent::GroupChanged(group));
    }
}
