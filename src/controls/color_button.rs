use crate::aggregate::AttributeSummary;
use crate::model::{Color, Scalar};

use super::{Control, ControlEdit, ControlError, ControlFlags, RawControlValue, Result};

/// Swatch button that shows every color of the selection at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorButton {
    colors: Vec<Option<Color>>,
    flags: ControlFlags,
}

impl ColorButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colors(&self) -> &[Option<Color>] {
        &self.colors
    }

    pub fn pick(&mut self, color: Option<Color>) {
        self.colors = vec![color];
    }
}

impl Control for ColorButton {
    fn render(&mut self, summary: &AttributeSummary) {
        self.colors = summary
            .candidates
            .iter()
            .filter_map(|candidate| match candidate {
                Scalar::Color(color) => Some(*color),
                _ => None,
            })
            .collect();
    }

    fn read(&self) -> RawControlValue {
        RawControlValue::Candidates(self.colors.iter().copied().map(Scalar::Color).collect())
    }

    fn edit(&mut self, edit: &ControlEdit) -> Result<()> {
        if !self.flags.enabled {
            return Err(ControlError::Disabled);
        }
        match edit {
            ControlEdit::PickColor { color } => {
                self.pick(*color);
                Ok(())
            }
            other => Err(ControlError::UnsupportedEdit {
                control: "color button",
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
