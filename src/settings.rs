mod error;
mod file;
mod memory;
mod preferences;


pub use error::{Result, SettingsError};
pub use file::JsonSettingsStore;
pub use memory::MemorySettingsStore;
pub use preferences::{DialogPreferences, Geometry};

use serde_json::Value;

/// Key/value persistence scoped by a caller-supplied group name.
pub trait SettingsStore {
    fn value(&self, group: &str, key: &str) -> Option<Value>;

    fn set_value(&mut self, group: &str, key: &str, value: Value) -> Result<()>;

    fn remove(&mut self, group: &str, key: &str) -> Result<Option<Value>>;

    /// Keys stored under `group`, sorted.
    fn keys(&self, group: &str) -> Vec<String>;
}
