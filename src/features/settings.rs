//! Application settings persistence
//!
//! Loads and saves user preferences as pretty-printed JSON in the platform
//! config directory. Domain data (roster, tags) is deliberately not
//! persisted; only what the user configures is. Missing fields fall back to
//! their defaults so files written by older builds keep loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Display and interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode on/off
    #[serde(default = "default_true")]
    pub dark_mode: bool,
    /// Interface language code ("en" or "zh")
    #[serde(default = "default_language")]
    pub language: String,
    /// Skip confetti effects; overlays still appear and dismiss normally
    #[serde(default)]
    pub reduce_motion: bool,
}

fn default_true() -> bool {
    true
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            language: default_language(),
            reduce_motion: false,
        }
    }
}

impl Settings {
    /// Settings file location, `None` when no home directory is available
    pub fn file_path() -> Option<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "fandesk", "fandesk")?;
        Some(dirs.config_dir().join("settings.json"))
    }

    /// Load from the default location, falling back to defaults on any error
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| Self::load_from_file(&path).ok())
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(SettingsError::io)?;
        serde_json::from_str(&content).map_err(SettingsError::parse)
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Self::file_path()
            .ok_or_else(|| SettingsError::Io("no config directory available".to_string()))?;
        self.save_to_file(&path)
    }

    /// Save settings to a specific file
    ///
    /// Writes to a sibling temp file first and renames it into place, so a
    /// crash mid-write never leaves a truncated settings file behind.
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(SettingsError::io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(SettingsError::parse)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(SettingsError::io)?;
        fs::rename(&tmp, path).map_err(SettingsError::io)?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl SettingsError {
    fn io(err: std::io::Error) -> Self {
        SettingsError::Io(err.to_string())
    }

    fn parse(err: serde_json::Error) -> Self {
        SettingsError::Parse(err.to_string())
    }
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "settings io error: {}", e),
            SettingsError::Parse(e) => write!(f, "settings parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_files_fill_in_defaults() {
        // Settings written by older builds miss newer fields.
        let settings: Settings = serde_json::from_str(r#"{"display":{"dark_mode":false}}"#)
            .expect("partial settings should parse");
        assert!(!settings.display.dark_mode);
        assert_eq!(settings.display.language, "en");
        assert!(!settings.display.reduce_motion);
    }

    #[test]
    fn empty_object_is_all_defaults() {
        let settings: Settings = serde_json::from_str("{}").expect("empty settings should parse");
        assert!(settings.display.dark_mode);
    }

    #[test]
    fn save_and_reload_round_trip() {
        let dir = std::env::temp_dir().join("fandesk-settings-test");
        let path = dir.join("settings.json");

        let mut settings = Settings::default();
        settings.display.language = "zh".to_string();
        settings.display.reduce_motion = true;
        settings.save_to_file(&path).expect("save should succeed");

        let loaded = Settings::load_from_file(&path).expect("reload should succeed");
        assert_eq!(loaded.display.language, "zh");
        assert!(loaded.display.reduce_motion);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn garbage_file_is_a_parse_error() {
        let dir = std::env::temp_dir().join("fandesk-settings-garbage");
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("settings.json");
        std::fs::write(&path, "not json").expect("write");

        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Parse(_))
        ));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
