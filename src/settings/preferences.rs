use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Result, SettingsStore};

const GEOMETRY_KEY: &str = "geometry";
const PAGE_KEY: &str = "page";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Window placement and last active page of a dialog. Attribute values are
/// never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DialogPreferences {
    pub geometry: Option<Geometry>,
    pub page: Option<String>,
}

impl DialogPreferences {
    /// Missing keys load as `None`.
    pub fn load(store: &dyn SettingsStore, group: &str) -> Result<Self> {
        let geometry = store
            .value(group, GEOMETRY_KEY)
            .map(serde_json::from_value)
            .transpose()?;
        let page = store
            .value(group, PAGE_KEY)
            .map(serde_json::from_value)
            .transpose()?;
        Ok(Self { geometry, page })
    }

    pub fn save(&self, store: &mut dyn SettingsStore, group: &str) -> Result<()> {
        match self.geometry {
            Some(geometry) => {
                store.set_value(group, GEOMETRY_KEY, serde_json::to_value(geometry)?)?;
            }
            None => {
                store.remove(group, GEOMETRY_KEY)?;
            }
        }
        match &self.page {
            Some(page) => {
                store.set_value(group, PAGE_KEY, Value::String(page.clone()))?;
            }
            None => {
                store.remove(group, PAGE_KEY)?;
            }
        }
        Ok(())
    }
}
