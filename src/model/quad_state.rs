use serde::{Deserialize, Serialize};

use super::AttributeValue;

/// Boolean attribute state across a selection, as shown by a tri-state check box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuadState {
    #[default]
    NoValue,
    Enabled,
    Disabled,
    EnabledAndDisabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckState {
    #[default]
    Unchecked,
    PartiallyChecked,
    Checked,
}

impl QuadState {
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        Self::from(AttributeValue::from_values(values))
    }

    pub fn resolved(self) -> Option<bool> {
        match self {
            Self::Enabled => Some(true),
            Self::Disabled => Some(false),
            Self::NoValue | Self::EnabledAndDisabled => None,
        }
    }

    /// Check box presentation. `NoValue` is shown indeterminate so an untouched
    /// box never reads back as a concrete value.
    pub fn check_state(self) -> CheckState {
        match self {
            Self::Enabled => CheckState::Checked,
            Self::Disabled => CheckState::Unchecked,
            Self::NoValue | Self::EnabledAndDisabled => CheckState::PartiallyChecked,
        }
    }
}

impl From<AttributeValue<bool>> for QuadState {
    fn from(value: AttributeValue<bool>) -> Self {
        match value {
            AttributeValue::Unset => Self::NoValue,
            AttributeValue::Single(true) => Self::Enabled,
            AttributeValue::Single(false) => Self::Disabled,
            AttributeValue::Conflicting => Self::EnabledAndDisabled,
        }
    }
}

impl From<QuadState> for AttributeValue<bool> {
    fn from(value: QuadState) -> Self {
        match value {
            QuadState::NoValue => Self::Unset,
            QuadState::Enabled => Self::Single(true),
            QuadState::Disabled => Self::Single(false),
            QuadState::EnabledAndDisabled => Self::Conflicting,
        }
    }
}

impl CheckState {
    pub fn value(self) -> Option<bool> {
        match self {
            Self::Checked => Some(true),
            Self::Unchecked => Some(false),
            Self::PartiallyChecked => None,
        }
    }
}
