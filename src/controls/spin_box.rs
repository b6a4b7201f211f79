use crate::aggregate::AttributeSummary;
use crate::model::Scalar;

use super::{Control, ControlEdit, ControlError, ControlFlags, RawControlValue, Result};

const DISPLAY_PRECISION: f64 = 1e6;

/// Numeric text field with an optional display scale and unit suffix.
///
/// The attribute value is `displayed / scale`. Until the user changes the text,
/// reading returns the exact value that was rendered, so no precision is lost
/// to display rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinBox {
    text: String,
    scale: f64,
    suffix: String,
    minimum: f64,
    maximum: f64,
    rendered: Option<(String, f64)>,
    flags: ControlFlags,
}

impl Default for SpinBox {
    fn default() -> Self {
        Self::new(f64::MIN, f64::MAX)
    }
}

impl SpinBox {
    /// Range bounds are in displayed units.
    pub fn new(minimum: f64, maximum: f64) -> Self {
        Self {
            text: String::new(),
            scale: 1.0,
            suffix: String::new(),
            minimum,
            maximum,
            rendered: None,
            flags: ControlFlags::default(),
        }
    }

    /// Shows fractions as percentages, e.g. `0.125` as `12.5%`.
    pub fn percentage(minimum: f64, maximum: f64) -> Self {
        Self::new(minimum, maximum).with_display(100.0, "%")
    }

    pub fn with_display(mut self, scale: f64, suffix: &str) -> Self {
        self.scale = scale;
        self.suffix = suffix.to_string();
        self
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_value(&mut self, value: f64) {
        self.text = self.display_text(value);
    }

    /// Switches units. A shown value would be misread under the new scale, so
    /// the field is cleared when the display actually changes.
    pub fn set_display(&mut self, scale: f64, suffix: &str) {
        if self.scale == scale && self.suffix == suffix {
            return;
        }
        self.scale = scale;
        self.suffix = suffix.to_string();
        self.text.clear();
        self.rendered = None;
    }

    fn display_text(&self, value: f64) -> String {
        let displayed = (value * self.scale * DISPLAY_PRECISION).round() / DISPLAY_PRECISION;
        format!("{displayed}{}", self.suffix)
    }

    fn number_text(&self) -> &str {
        let trimmed = self.text.trim();
        let suffix = self.suffix.trim();
        trimmed
            .strip_suffix(suffix)
            .unwrap_or(trimmed)
            .trim_end()
    }
}

impl Control for SpinBox {
    fn render(&mut self, summary: &AttributeSummary) {
        match summary.value.resolved_value() {
            Some(Scalar::Float(value)) => {
                self.text = self.display_text(*value);
                self.rendered = Some((self.text.clone(), *value));
            }
            _ => {
                self.text.clear();
                self.rendered = None;
            }
        }
    }

    fn read(&self) -> RawControlValue {
        let number = self.number_text();
        if number.is_empty() {
            return RawControlValue::Blank;
        }
        if let Some((shown, value)) = &self.rendered {
            if *shown == self.text {
                return RawControlValue::Resolved(Scalar::Float(*value));
            }
        }
        match number.parse::<f64>() {
            Ok(displayed)
                if displayed.is_finite()
                    && displayed >= self.minimum
                    && displayed <= self.maximum =>
            {
                RawControlValue::Resolved(Scalar::Float(displayed / self.scale))
            }
            _ => RawControlValue::Invalid(self.text.clone()),
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
                control: "spin box",
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
