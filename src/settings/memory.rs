use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Result, SettingsError, SettingsStore};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemorySettingsStore {
    groups: BTreeMap<String, BTreeMap<String, Value>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}

impl SettingsStore for MemorySettingsStore {
    fn value(&self, group: &str, key: &str) -> Option<Value> {
        self.groups.get(group)?.get(key).cloned()
    }

    fn set_value(&mut self, group: &str, key: &str, value: Value) -> Result<()> {
        if group.trim().is_empty() {
            return Err(SettingsError::EmptyGroup);
        }
        self.groups
            .entry(group.to_string())
            .or_default()
            .insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, group: &str, key: &str) -> Result<Option<Value>> {
        let Some(entries) = self.groups.get_mut(group) else {
            return Ok(None);
        };
        let removed = entries.remove(key);
        if entries.is_empty() {
            self.groups.remove(group);
        }
        Ok(removed)
    }

    fn keys(&self, group: &str) -> Vec<String> {
        self.groups
            .get(group)
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default()
    }
}
