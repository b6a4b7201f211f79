use std::path::Path;

use crate::settings::{DialogPreferences, JsonSettingsStore};

use super::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct SettingsService;

impl SettingsService {
    pub fn open(&self, path: impl AsRef<Path>) -> Result<JsonSettingsStore> {
        Ok(JsonSettingsStore::open(path)?)
    }

    pub fn preferences(&self, store: &JsonSettingsStore, group: &str) -> Result<DialogPreferences> {
        Ok(DialogPreferences::load(store, group)?)
    }
}
