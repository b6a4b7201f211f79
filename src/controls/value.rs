use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Color, Scalar};

/// What a control currently shows, as read back by the reconciler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum RawControlValue {
    /// Empty field or no selection.
    Blank,
    /// Text that does not parse as the attribute's type.
    Invalid(String),
    /// A check box left in its partially checked state.
    Indeterminate,
    Resolved(Scalar),
    /// Every value a multi-valued control (a color swatch) holds.
    Candidates(Vec<Scalar>),
}

impl RawControlValue {
    /// The concrete value this reading stands for, if there is exactly one.
    pub fn resolved(&self) -> Option<&Scalar> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Candidates(values) if values.len() == 1 => values.first(),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid(_))
    }

    /// The reading viewed as a set of candidate values.
    pub fn candidate_set(&self) -> Vec<Scalar> {
        match self {
            Self::Resolved(value) => vec![value.clone()],
            Self::Candidates(values) => values.clone(),
            Self::Blank | Self::Invalid(_) | Self::Indeterminate => Vec::new(),
        }
    }
}

/// One user interaction with a control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ControlEdit {
    SetText { text: String },
    SetChecked { checked: bool },
    Click,
    Select { value: Scalar },
    PickColor { color: Option<Color> },
}

impl ControlEdit {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetText { .. } => "set_text",
            Self::SetChecked { .. } => "set_checked",
            Self::Click => "click",
            Self::Select { .. } => "select",
            Self::PickColor { .. } => "pick_color",
        }
    }
}

/// Readings of every control a dialog shows, keyed by attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlReadings<K> {
    values: BTreeMap<K, RawControlValue>,
}

impl<K> Default for ControlReadings<K> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy> ControlReadings<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: K, value: RawControlValue) {
        self.values.insert(key, value);
    }

    pub fn get(&self, key: K) -> Option<&RawControlValue> {
        self.values.get(&key)
    }

    pub fn resolved(&self, key: K) -> Option<&Scalar> {
        self.get(key).and_then(RawControlValue::resolved)
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &RawControlValue)> {
        self.values.iter().map(|(key, value)| (*key, value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Ord> FromIterator<(K, RawControlValue)> for ControlReadings<K> {
    fn from_iter<I: IntoIterator<Item = (K, RawControlValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
