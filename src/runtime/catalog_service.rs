use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::controls::{FontCatalog, StaticFontCatalog};
use crate::model::{FontWeight, nearest_supported_weight};
use crate::workflow::load_catalog;

use super::Result;

/// Weight a typeface would actually render for a requested weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightResolution {
    pub family: String,
    pub size: f64,
    pub requested: FontWeight,
    pub supported: Vec<FontWeight>,
    pub resolved: Option<FontWeight>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogService;

impl CatalogService {
    /// Loads a catalog file, or the built-in catalog when no path is given.
    pub fn load(&self, path: Option<&Path>) -> Result<Arc<dyn FontCatalog>> {
        let catalog = match path {
            Some(path) => load_catalog(path)?,
            None => StaticFontCatalog::default(),
        };
        Ok(Arc::new(catalog))
    }

    pub fn resolve_weight(
        &self,
        catalog: &dyn FontCatalog,
        family: &str,
        size: f64,
        requested: FontWeight,
    ) -> WeightResolution {
        let supported = catalog.supported_weights(family, size);
        let resolved = nearest_supported_weight(requested, &supported);
        WeightResolution {
            family: family.to_string(),
            size,
            requested,
            supported,
            resolved,
        }
    }
}
