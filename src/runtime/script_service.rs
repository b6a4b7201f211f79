use std::path::Path;
use std::sync::Arc;

use crate::controls::FontCatalog;
use crate::settings::SettingsStore;
use crate::workflow::{EditScript, SessionReport, load_script, run_script, save_report};

use super::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptService;

impl ScriptService {
    pub fn load(&self, path: impl AsRef<Path>) -> Result<EditScript> {
        Ok(load_script(path)?)
    }

    pub fn run(
        &self,
        script: &EditScript,
        catalog: Arc<dyn FontCatalog>,
        settings: Option<&mut dyn SettingsStore>,
    ) -> Result<SessionReport> {
        Ok(run_script(script, catalog, settings)?)
    }

    pub fn save_report(&self, path: impl AsRef<Path>, report: &SessionReport) -> Result<()> {
        save_report(path, report)?;
        Ok(())
    }
}
