use serde::{Deserialize, Serialize};

/// The value of one attribute across every object of a selection.
///
/// Equality is the exact `PartialEq` of `T`; floating point values are
/// compared without any tolerance, so `0.1 + 0.2` and `0.3` conflict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum AttributeValue<T> {
    /// No object contributed a value.
    Unset,
    /// Every contributing object agrees.
    Single(T),
    /// Two or more distinct values are present.
    Conflicting,
}

impl<T> Default for AttributeValue<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T: PartialEq> AttributeValue<T> {
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().fold(Self::Unset, Self::combine)
    }

    /// Folds one more object's value into the aggregate.
    pub fn combine(self, value: T) -> Self {
        match self {
            Self::Unset => Self::Single(value),
            Self::Single(current) if current == value => Self::Single(current),
            Self::Single(_) | Self::Conflicting => Self::Conflicting,
        }
    }
}

impl<T> AttributeValue<T> {
    pub fn resolved_value(&self) -> Option<&T> {
        match self {
            Self::Single(value) => Some(value),
            Self::Unset | Self::Conflicting => None,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn is_conflicting(&self) -> bool {
        matches!(self, Self::Conflicting)
    }

    pub fn is_single(&self) -> bool {
        matches!(self, Self::Single(_))
    }

    pub fn map<U, F>(self, f: F) -> AttributeValue<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Unset => AttributeValue::Unset,
            Self::Single(value) => AttributeValue::Single(f(value)),
            Self::Conflicting => AttributeValue::Conflicting,
        }
    }
}
