use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::Value;

use super::{MemorySettingsStore, Result, SettingsStore};

/// Settings kept in one pretty-printed JSON file, rewritten on every change.
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
    entries: MemorySettingsStore,
}

impl JsonSettingsStore {
    /// Opens `path`, starting empty when the file does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                MemorySettingsStore::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            MemorySettingsStore::new()
        };
        debug!("opened settings store {}", path.display());
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.entries)?)?;
        Ok(())
    }
}

impl SettingsStore for JsonSettingsStore {
    fn value(&self, group: &str, key: &str) -> Option<Value> {
        self.entries.value(group, key)
    }

    fn set_value(&mut self, group: &str, key: &str, value: Value) -> Result<()> {
        self.entries.set_value(group, key, value)?;
        self.flush()
    }

    fn remove(&mut self, group: &str, key: &str) -> Result<Option<Value>> {
        let removed = self.entries.remove(group, key)?;
        if removed.is_some() {
            self.flush()?;
        }
        Ok(removed)
    }

    fn keys(&self, group: &str) -> Vec<String> {
        self.entries.keys(group)
    }
}
