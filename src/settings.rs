//! Persisted theme settings.
//!
//! Each theme value is stored under its own string key. The store trait
//! mirrors the `get_string`/`set_string`/`flush` surface of eframe storage;
//! scalar values are serialized as JSON strings so bools and doubles
//! round-trip without a custom format.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Keys for the persisted theme settings.
pub mod keys {
    pub const REQUESTED_THEME: &str = "requested_theme";
    pub const USE_SYSTEM_THEME: &str = "use_system_theme";
    pub const USE_SYSTEM_ACCENT_COLOR: &str = "use_system_accent_color";
    pub const APP_ACCENT_COLOR: &str = "app_accent_color";
    pub const CUSTOM_ACCENT_COLOR: &str = "custom_accent_color";
    pub const BACKGROUND_TINT_OPACITY: &str = "background_tint_opacity";
}

/// String-keyed settings store the theme context persists through.
pub trait SettingsStore {
    fn get_string(&self, key: &str) -> Option<String>;
    fn set_string(&mut self, key: &str, value: String);
    fn flush(&mut self);
}

/// Reads a typed value, returning `None` when the key is absent or the
/// stored string does not parse. Callers fall back to their defaults.
pub fn read_value<T: DeserializeOwned>(store: &dyn SettingsStore, key: &str) -> Option<T> {
    let raw = store.get_string(key)?;
    serde_json::from_str(&raw).ok()
}

/// Writes a typed value as a JSON string and flushes.
pub fn write_value<T: Serialize>(store: &mut dyn SettingsStore, key: &str, value: &T) {
    if let Ok(raw) = serde_json::to_string(value) {
        store.set_string(key, raw);
        store.flush();
    }
}

/// In-memory settings store.
///
/// Handles share one map (the GUI is single-threaded), so a clone given to
/// a theme context can still be inspected or reused afterwards.
#[derive(Clone, Default)]
pub struct MemorySettingsStore {
    data: std::rc::Rc<std::cell::RefCell<HashMap<String, String>>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.data.borrow().get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.data.borrow_mut().insert(key.to_string(), value);
    }

    fn flush(&mut self) {}
}

/// Settings store backed by a JSON file.
///
/// Missing or malformed files start empty; write failures are logged and
/// the in-memory state stays authoritative for the session.
pub struct FileSettingsStore {
    path: PathBuf,
    data: HashMap<String, String>,
    dirty: bool,
}

impl FileSettingsStore {
    /// Opens a store at the given path, loading existing contents if any.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = Self::load(&path).unwrap_or_default();
        Self {
            path,
            data,
            dirty: false,
        }
    }

    /// Default settings path for an application name, under the user's
    /// config directory.
    pub fn default_path(app_name: &str) -> Option<PathBuf> {
        Some(dirs::config_dir()?.join(app_name).join("settings.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Option<HashMap<String, String>> {
        let raw = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::warn!("ignoring malformed settings file {}: {e}", path.display());
                None
            }
        }
    }
}

impl SettingsStore for FileSettingsStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.data.insert(key.to_string(), value);
        self.dirty = true;
    }

    fn flush(&mut self) {
        if !self.dirty {
            return;
        }
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("failed to create settings dir {}: {e}", parent.display());
                return;
            }
        }
        match serde_json::to_string_pretty(&self.data) {
            Ok(raw) => match std::fs::write(&self.path, raw) {
                Ok(()) => self.dirty = false,
                Err(e) => {
                    tracing::warn!("failed to write settings file {}: {e}", self.path.display());
                }
            },
            Err(e) => tracing::warn!("failed to serialize settings: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_round_trip() {
        let mut store = MemorySettingsStore::new();

        write_value(&mut store, keys::USE_SYSTEM_THEME, &true);
        write_value(&mut store, keys::BACKGROUND_TINT_OPACITY, &0.75f64);

        assert_eq!(read_value::<bool>(&store, keys::USE_SYSTEM_THEME), Some(true));
        assert_eq!(
            read_value::<f64>(&store, keys::BACKGROUND_TINT_OPACITY),
            Some(0.75)
        );
    }

    #[test]
    fn test_malformed_value_reads_as_none() {
        let mut store = MemorySettingsStore::new();
        store.set_string(keys::BACKGROUND_TINT_OPACITY, "not a number".to_string());
        assert_eq!(read_value::<f64>(&store, keys::BACKGROUND_TINT_OPACITY), None);
    }

    #[test]
    fn test_shared_handles_see_writes() {
        let mut store = MemorySettingsStore::new();
        let reader = store.clone();
        store.set_string("k", "\"v\"".to_string());
        assert_eq!(reader.get_string("k"), Some("\"v\"".to_string()));
    }
}
