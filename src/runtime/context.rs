use super::{CatalogService, ScriptService, SelectionService, SettingsService};

#[derive(Debug, Clone, Default)]
pub struct AppContext {
    catalog_service: CatalogService,
    script_service: ScriptService,
    selection_service: SelectionService,
    settings_service: SettingsService,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog_service(&self) -> &CatalogService {
        &self.catalog_service
    }

    pub fn script_service(&self) -> &ScriptService {
        &self.script_service
    }

    pub fn selection_service(&self) -> &SelectionService {
        &self.selection_service
    }

    pub fn settings_service(&self) -> &SettingsService {
        &self.settings_service
    }
}
