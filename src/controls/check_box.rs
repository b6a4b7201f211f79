use crate::aggregate::AttributeSummary;
use crate::model::{AttributeValue, CheckState, QuadState, Scalar};

use super::{Control, ControlEdit, ControlError, ControlFlags, RawControlValue, Result};

/// Tri-state check box for boolean attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckBox {
    state: CheckState,
    tristate: bool,
    flags: ControlFlags,
}

impl CheckBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CheckState {
        self.state
    }

    /// True while the box still shows the indeterminate state from rendering.
    pub fn is_tristate(&self) -> bool {
        self.tristate
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.state = if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        };
        self.tristate = false;
    }

    /// Partially checked boxes become checked; the indeterminate state is not
    /// reachable again by clicking.
    pub fn click(&mut self) {
        let checked = !matches!(self.state, CheckState::Checked);
        self.set_checked(checked);
    }
}

impl Control for CheckBox {
    fn render(&mut self, summary: &AttributeSummary) {
        let value = match &summary.value {
            AttributeValue::Single(Scalar::Bool(value)) => AttributeValue::Single(*value),
            AttributeValue::Conflicting => AttributeValue::Conflicting,
            AttributeValue::Single(_) | AttributeValue::Unset => AttributeValue::Unset,
        };
        self.state = QuadState::from(value).check_state();
        self.tristate = self.state == CheckState::PartiallyChecked;
    }

    fn read(&self) -> RawControlValue {
        self.state
            .value()
            .map_or(RawControlValue::Indeterminate, |checked| {
                RawControlValue::Resolved(Scalar::Bool(checked))
            })
    }

    fn edit(&mut self, edit: &ControlEdit) -> Result<()> {
        if !self.flags.enabled {
            return Err(ControlError::Disabled);
        }
        match edit {
            ControlEdit::SetChecked { checked } => self.set_checked(*checked),
            ControlEdit::Click => self.click(),
            other => {
                return Err(ControlError::UnsupportedEdit {
                    control: "check box",
                    edit: other.name(),
                });
            }
        }
        Ok(())
    }

    fn flags(&self) -> ControlFlags {
        self.flags
    }

    fn flags_mut(&mut self) -> &mut ControlFlags {
        &mut self.flags
    }
}
