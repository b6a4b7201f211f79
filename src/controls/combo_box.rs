use crate::aggregate::AttributeSummary;
use crate::model::Scalar;

use super::{Control, ControlEdit, ControlError, ControlFlags, RawControlValue, Result};

/// Drop-down over a fixed list of values; editable boxes also accept typed text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComboBox {
    choices: Vec<Scalar>,
    selected: Option<usize>,
    editable: bool,
    flags: ControlFlags,
}

impl ComboBox {
    pub fn new<I, T>(choices: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Scalar>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn editable(mut self) -> Self {
        self.editable = true;
        self
    }

    pub fn choices(&self) -> &[Scalar] {
        &self.choices
    }

    pub fn selected(&self) -> Option<&Scalar> {
        self.selected.and_then(|index| self.choices.get(index))
    }

    /// Replaces the offered values, keeping the selection if it is still offered.
    pub fn set_choices(&mut self, choices: Vec<Scalar>) {
        let previous = self.selected().cloned();
        self.choices = choices;
        self.selected = previous.and_then(|value| self.position(&value));
    }

    pub fn select(&mut self, value: &Scalar) -> Result<()> {
        let index = self
            .position(value)
            .ok_or_else(|| ControlError::UnknownChoice(format!("{value:?}")))?;
        self.selected = Some(index);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    fn position(&self, value: &Scalar) -> Option<usize> {
        self.choices.iter().position(|choice| choice == value)
    }

    fn select_or_insert(&mut self, value: Scalar) {
        let index = match self.position(&value) {
            Some(index) => index,
            None => {
                self.choices.push(value);
                self.choices.len() - 1
            }
        };
        self.selected = Some(index);
    }
}

impl Control for ComboBox {
    fn render(&mut self, summary: &AttributeSummary) {
        match summary.value.resolved_value() {
            Some(value) => self.select_or_insert(value.clone()),
            None => self.selected = None,
        }
    }

    fn read(&self) -> RawControlValue {
        self.selected()
            .map_or(RawControlValue::Blank, |value| {
                RawControlValue::Resolved(value.clone())
            })
    }

    fn edit(&mut self, edit: &ControlEdit) -> Result<()> {
        if !self.flags.enabled {
            return Err(ControlError::Disabled);
        }
        match edit {
            ControlEdit::Select { value } => self.select(value),
            ControlEdit::SetText { text } if self.editable => {
                if text.is_empty() {
                    self.selected = None;
                } else {
                    self.select_or_insert(Scalar::Text(text.clone()));
                }
                Ok(())
            }
            other => Err(ControlError::UnsupportedEdit {
                control: "combo box",
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
