use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::aggregate::ChangeCategory;
use crate::model::Scalar;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttributeChange {
    pub changed: bool,
    /// The value to apply; `None` when the control holds no single value.
    pub value: Option<Scalar>,
}

impl AttributeChange {
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn changed_to(value: Option<Scalar>) -> Self {
        Self {
            changed: true,
            value,
        }
    }

    pub fn applicable_value(&self) -> Option<&Scalar> {
        if self.changed {
            self.value.as_ref()
        } else {
            None
        }
    }
}

/// Per-attribute outcome of comparing the controls against the original aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeSet<K> {
    attributes: BTreeMap<K, AttributeChange>,
    categories: BTreeMap<ChangeCategory, bool>,
}

impl<K> Default for ChangeSet<K> {
    fn default() -> Self {
        Self {
            attributes: BTreeMap::new(),
            categories: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy> ChangeSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: K, category: ChangeCategory, change: AttributeChange) {
        *self.categories.entry(category).or_insert(false) |= change.changed;
        self.attributes.insert(key, change);
    }

    pub fn get(&self, key: K) -> Option<&AttributeChange> {
        self.attributes.get(&key)
    }

    pub fn changed(&self, key: K) -> bool {
        self.get(key).is_some_and(|change| change.changed)
    }

    pub fn category_changed(&self, category: ChangeCategory) -> bool {
        self.categories.get(&category).copied().unwrap_or(false)
    }

    /// OR over every category; gates the commit action.
    pub fn values_changed(&self) -> bool {
        self.categories.values().any(|changed| *changed)
    }

    pub fn changed_keys(&self) -> impl Iterator<Item = K> + '_ {
        self.attributes
            .iter()
            .filter(|(_, change)| change.changed)
            .map(|(key, _)| *key)
    }

    /// Changed attributes that carry a value to write, in key order.
    pub fn applicable(&self) -> impl Iterator<Item = (K, &Scalar)> {
        self.attributes
            .iter()
            .filter_map(|(key, change)| change.applicable_value().map(|value| (*key, value)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &AttributeChange)> {
        self.attributes.iter().map(|(key, change)| (*key, change))
    }
}
