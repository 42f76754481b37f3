//! Randomizer Settings
//!
//! The user-facing configuration surface: two switches and a mode choice,
//! persisted as YAML between sessions. Each value takes effect on the next
//! resolution call; nothing here touches the engine directly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use ss_core::{SsError, SsResult};
use ss_engine::SelectionMode;

/// Persisted randomizer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomizerSettings {
    /// Master switch. Off by default so a fresh install changes nothing.
    pub enabled: bool,
    /// Pin each original→replacement choice for the session.
    pub deterministic: bool,
    /// Candidate pool policy for replacement selection.
    pub mode: SelectionMode,
}

impl Default for RandomizerSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            deterministic: true,
            mode: SelectionMode::GroupByCategory,
        }
    }
}

impl RandomizerSettings {
    /// Load settings from a YAML file.
    ///
    /// A missing file is a fresh install and yields defaults silently.
    /// An unreadable or unparsable file (including an unknown mode tag)
    /// also yields defaults, logged as an error — bad stored config must
    /// not keep the host from starting.
    pub fn load(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(err) => {
                log::error!("Failed to read settings {:?}: {}, using defaults", path, err);
                return Self::default();
            }
        };

        match serde_yml::from_str(&text) {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("Failed to parse settings {:?}: {}, using defaults", path, err);
                Self::default()
            }
        }
    }

    /// Save settings as YAML, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> SsResult<()> {
        let text =
            serde_yml::to_string(self).map_err(|err| SsError::Settings(err.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, text)?;
        Ok(())
    }
}
