use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::FontWeight;

/// Source of the weights a typeface offers.
pub trait FontCatalog: fmt::Debug {
    fn families(&self) -> Vec<String>;

    /// Supported weights for `family` at `size` points, in weight order.
    fn supported_weights(&self, family: &str, size: f64) -> Vec<FontWeight>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeOverride {
    pub size: f64,
    pub weights: Vec<FontWeight>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TypefaceEntry {
    pub weights: Vec<FontWeight>,
    /// Bitmap typefaces can offer fewer weights at some sizes.
    #[serde(default)]
    pub sizes: Vec<SizeOverride>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticFontCatalog {
    #[serde(default)]
    pub typefaces: BTreeMap<String, TypefaceEntry>,
    /// Used for families the catalog does not list.
    #[serde(default = "default_weights")]
    pub fallback_weights: Vec<FontWeight>,
}

fn default_weights() -> Vec<FontWeight> {
    vec![FontWeight::Normal, FontWeight::Bold]
}

impl Default for StaticFontCatalog {
    fn default() -> Self {
        Self {
            typefaces: BTreeMap::new(),
            fallback_weights: default_weights(),
        }
    }
}

impl StaticFontCatalog {
    pub fn with_typeface(mut self, family: &str, weights: &[FontWeight]) -> Self {
        self.typefaces.insert(
            family.to_string(),
            TypefaceEntry {
                weights: weights.to_vec(),
                sizes: Vec::new(),
            },
        );
        self
    }
}

impl FontCatalog for StaticFontCatalog {
    fn families(&self) -> Vec<String> {
        self.typefaces.keys().cloned().collect()
    }

    fn supported_weights(&self, family: &str, size: f64) -> Vec<FontWeight> {
        let mut weights = match self.typefaces.get(family) {
            Some(entry) => entry
                .sizes
                .iter()
                .find(|candidate| candidate.size == size)
                .map_or_else(|| entry.weights.clone(), |found| found.weights.clone()),
            None => self.fallback_weights.clone(),
        };
        weights.sort();
        weights.dedup();
        weights
    }
}
