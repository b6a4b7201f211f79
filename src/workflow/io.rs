use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::controls::StaticFontCatalog;
use crate::model::Selection;

use super::{EditScript, Result, SessionReport};

fn is_yaml(path: &Path) -> bool {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    matches!(extension.as_str(), "yaml" | "yml")
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)?;
    let document = if is_yaml(path) {
        serde_yaml::from_str::<T>(&raw)?
    } else {
        serde_json::from_str::<T>(&raw)?
    };
    Ok(document)
}

fn write_document<T: Serialize>(path: &Path, document: &T) -> Result<()> {
    let serialized = if is_yaml(path) {
        serde_yaml::to_string(document)?
    } else {
        serde_json::to_string_pretty(document)?
    };
    fs::write(path, serialized)?;
    Ok(())
}

pub fn load_script(path: impl AsRef<Path>) -> Result<EditScript> {
    let script = read_document::<EditScript>(path.as_ref())?;
    script.validate()?;
    Ok(script)
}

/// Loads a list of formats and numbers the objects from 1.
pub fn load_formats<F: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Selection<F>> {
    let formats = read_document::<Vec<F>>(path.as_ref())?;
    Ok(Selection::from_formats(formats))
}

pub fn load_catalog(path: impl AsRef<Path>) -> Result<StaticFontCatalog> {
    read_document(path.as_ref())
}

pub fn save_report(path: impl AsRef<Path>, report: &SessionReport) -> Result<()> {
    write_document(path.as_ref(), report)
}
