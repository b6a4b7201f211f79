use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedObject<F> {
    pub id: ObjectId,
    pub format: F,
}

/// The format-bearing objects a dialog was opened on, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection<F> {
    objects: Vec<SelectedObject<F>>,
}

impl<F> Default for Selection<F> {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
        }
    }
}

impl<F> Selection<F> {
    pub fn new(objects: Vec<SelectedObject<F>>) -> Self {
        Self { objects }
    }

    /// Numbers the formats `1..=n` in order.
    pub fn from_formats(formats: impl IntoIterator<Item = F>) -> Self {
        let objects = formats
            .into_iter()
            .zip(1_u64..)
            .map(|(format, id)| SelectedObject {
                id: ObjectId(id),
                format,
            })
            .collect();
        Self { objects }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectedObject<F>> {
        self.objects.iter()
    }

    pub fn formats(&self) -> impl Iterator<Item = &F> {
        self.objects.iter().map(|object| &object.format)
    }

    pub fn get(&self, id: ObjectId) -> Option<&F> {
        self.objects
            .iter()
            .find(|object| object.id == id)
            .map(|object| &object.format)
    }
}

impl<F: Clone> Selection<F> {
    /// Replaces the formats of the objects named in `updates`, leaving the rest untouched.
    pub fn with_updates(&self, updates: &BTreeMap<ObjectId, F>) -> Self {
        let objects = self
            .objects
            .iter()
            .map(|object| SelectedObject {
                id: object.id,
                format: updates
                    .get(&object.id)
                    .cloned()
                    .unwrap_or_else(|| object.format.clone()),
            })
            .collect();
        Self { objects }
    }
}
