//! Editor preference storage.
//!
//! Process-wide UI state (sidebar collapsed, last-used section kind)
//! lives behind the [`SettingsStore`] trait rather than a global, so the
//! editor core takes an injected store and tests run against the
//! in-memory one. The file-backed implementation persists a flat string
//! map as JSON at a caller-supplied path.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const SIDEBAR_COLLAPSED: &str = "sidebar.collapsed";
pub const LAST_SECTION_KIND: &str = "editor.lastSectionKind";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file at {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings file at {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Key-value side channel for editor preferences.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);

    fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| v.parse().ok())
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.set(key, if value { "true" } else { "false" });
    }
}

/// Session-lifetime store with no persistence. Used in tests and as the
/// fallback when the side channel is unavailable.
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: BTreeMap<String, String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Preferences persisted as a JSON object on disk. Writes go straight
/// through on every `set`; the file is small and sets are rare.
#[derive(Debug)]
pub struct FileSettings {
    values: BTreeMap<String, String>,
    path: PathBuf,
}

impl FileSettings {
    /// Load settings from `path`, or start empty when the file does not
    /// exist yet.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self {
                values: BTreeMap::new(),
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| {
            SettingsError::ReadError {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let values: BTreeMap<String, String> =
            serde_json::from_str(&content).map_err(|source| SettingsError::ParseError {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            values,
            path: path.to_path_buf(),
        })
    }

    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl SettingsStore for FileSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        // best effort; a missed preference write is not worth surfacing
        let _ = self.save();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_memory_settings_round_trip() {
        let mut settings = MemorySettings::new();

        settings.set_bool(SIDEBAR_COLLAPSED, true);

        assert_eq!(settings.get_bool(SIDEBAR_COLLAPSED), Some(true));
        assert_eq!(settings.get("missing"), None);
    }

    #[test]
    fn test_file_settings_missing_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let settings = FileSettings::load_from_path(dir.path().join("settings.json")).unwrap();

        assert_eq!(settings.get(SIDEBAR_COLLAPSED), None);
    }

    #[test]
    fn test_file_settings_persist_across_loads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = FileSettings::load_from_path(&path).unwrap();
        settings.set_bool(SIDEBAR_COLLAPSED, true);
        settings.set(LAST_SECTION_KIND, "faq");

        let reloaded = FileSettings::load_from_path(&path).unwrap();
        assert_eq!(reloaded.get_bool(SIDEBAR_COLLAPSED), Some(true));
        assert_eq!(reloaded.get(LAST_SECTION_KIND), Some("faq".to_string()));
    }

    #[test]
    fn test_file_settings_corrupt_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        let result = FileSettings::load_from_path(&path);

        assert!(matches!(result, Err(SettingsError::ParseError { .. })));
    }
}
