use crate::aggregate::AttributeSummary;
use crate::model::Scalar;

use super::{Control, ControlEdit, ControlError, ControlFlags, RawControlValue, Result};

/// Free text field.
///
/// Empty text reads as blank unless the field accepts empty values and the
/// user emptied it on purpose.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineEdit {
    text: String,
    edited: bool,
    accepts_empty: bool,
    flags: ControlFlags,
}

impl LineEdit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accepting_empty() -> Self {
        Self {
            accepts_empty: true,
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.edited = true;
    }
}

impl Control for LineEdit {
    fn render(&mut self, summary: &AttributeSummary) {
        self.text = match summary.value.resolved_value() {
            Some(Scalar::Text(text)) => text.clone(),
            _ => String::new(),
        };
        self.edited = false;
    }

    fn read(&self) -> RawControlValue {
        if !self.text.is_empty() || (self.accepts_empty && self.edited) {
            RawControlValue::Resolved(Scalar::Text(self.text.clone()))
        } else {
            RawControlValue::Blank
        }
    }

    fn edit(&mut self, edit: &ControlEdit) -> Result<()> {
        if !self.flags.enabled {
            return Err(ControlError::Disabled);
        }
        match edit {
            ControlEdit::SetText { text } => {
                self.set_text(text.clone());
                Ok(())
            }
            other => Err(ControlError::UnsupportedEdit {
                control: "line edit",
                edit: other.name(),
            }),
        }
    }

    fn flags(&self) -> ControlFlags {
        self.flags
    }

    fn flags_mut(&mut self) -> &mut ControlFlags {
        &mut self.flags
    }
}
