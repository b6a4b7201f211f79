mod catalog_service;
mod context;
mod error;
mod script_service;
mod selection_service;
mod settings_service;


pub use catalog_service::{CatalogService, WeightResolution};
pub use context::AppContext;
pub use error::{AppError, Result};
pub use script_service::ScriptService;
pub use selection_service::{SelectionReport, SelectionService};
pub use settings_service::SettingsService;
