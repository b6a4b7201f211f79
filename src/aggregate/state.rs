use std::collections::BTreeMap;

use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::model::{AttributeValue, CoreError, Result, Scalar, Selection};

use super::{FormatSchema, KeyOf};

/// Aggregate of one attribute plus the distinct values behind it, in first-seen order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttributeSummary {
    pub value: AttributeValue<Scalar>,
    pub candidates: Vec<Scalar>,
}

impl AttributeSummary {
    pub fn from_values(values: impl IntoIterator<Item = Scalar>) -> Self {
        let mut summary = Self::default();
        for value in values {
            summary.push(value);
        }
        summary
    }

    pub fn push(&mut self, value: Scalar) {
        if !self.candidates.contains(&value) {
            self.candidates.push(value.clone());
        }
        self.value = std::mem::take(&mut self.value).combine(value);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeReport {
    pub name: String,
    pub value: AttributeValue<Scalar>,
    pub candidates: Vec<Scalar>,
}

/// Snapshot of every tracked attribute across a selection.
#[derive(Debug, Clone)]
pub struct AggregateState<S: FormatSchema> {
    attributes: BTreeMap<KeyOf<S>, AttributeSummary>,
    object_count: usize,
}

impl<S: FormatSchema> AggregateState<S> {
    pub fn build(selection: &Selection<S::Format>) -> Self {
        let attributes = S::keys(selection)
            .into_iter()
            .map(|key| {
                let summary = AttributeSummary::from_values(
                    selection.formats().filter_map(|format| S::read(format, key)),
                );
                (key, summary)
            })
            .collect::<BTreeMap<_, _>>();
        debug!(
            "built {} aggregate: {} attributes over {} objects",
            S::NAME,
            attributes.len(),
            selection.len()
        );
        Self {
            attributes,
            object_count: selection.len(),
        }
    }

    pub fn object_count(&self) -> usize {
        self.object_count
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn contains(&self, key: KeyOf<S>) -> bool {
        self.attributes.contains_key(&key)
    }

    pub fn summary(&self, key: KeyOf<S>) -> Result<&AttributeSummary> {
        self.attributes
            .get(&key)
            .ok_or_else(|| unknown_attribute::<S>(key.to_string()))
    }

    pub fn attribute(&self, key: KeyOf<S>) -> Result<&AttributeValue<Scalar>> {
        Ok(&self.summary(key)?.value)
    }

    pub fn attribute_named(&self, name: &str) -> Result<&AttributeValue<Scalar>> {
        let key = S::parse_key(name).ok_or_else(|| unknown_attribute::<S>(name.to_string()))?;
        self.attribute(key)
    }

    pub fn candidates(&self, key: KeyOf<S>) -> Result<&[Scalar]> {
        Ok(&self.summary(key)?.candidates)
    }

    /// Single value of `key`, if the attribute is tracked and uniform.
    pub fn resolved(&self, key: KeyOf<S>) -> Option<&Scalar> {
        self.attributes
            .get(&key)
            .and_then(|summary| summary.value.resolved_value())
    }

    pub fn keys(&self) -> impl Iterator<Item = KeyOf<S>> + '_ {
        self.attributes.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (KeyOf<S>, &AttributeSummary)> {
        self.attributes.iter().map(|(key, summary)| (*key, summary))
    }

    pub fn report(&self) -> Vec<AttributeReport> {
        self.iter()
            .map(|(key, summary)| AttributeReport {
                name: key.to_string(),
                value: summary.value.clone(),
                candidates: summary.candidates.clone(),
            })
            .collect()
    }
}

pub(crate) fn unknown_attribute<S: FormatSchema>(name: String) -> CoreError {
    error!("{} dialog has no attribute `{name}`", S::NAME);
    CoreError::UnknownAttribute {
        schema: S::NAME,
        name,
    }
}
