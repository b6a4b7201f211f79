mod catalog;
mod check_box;
mod color_button;
mod combo_box;
mod error;
mod line_edit;
mod spin_box;
mod value;

#[cfg(test)]
mod tests;

pub use catalog::{FontCatalog, SizeOverride, StaticFontCatalog, TypefaceEntry};
pub use check_box::CheckBox;
pub use color_button::ColorButton;
pub use combo_box::ComboBox;
pub use error::{ControlError, Result};
pub use line_edit::LineEdit;
pub use spin_box::SpinBox;
pub use value::{ControlEdit, ControlReadings, RawControlValue};

use crate::aggregate::AttributeSummary;

/// Enabled/visible flags shared by every control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlFlags {
    pub enabled: bool,
    pub visible: bool,
}

impl Default for ControlFlags {
    fn default() -> Self {
        Self {
            enabled: true,
            visible: true,
        }
    }
}

/// A headless stand-in for one interactive widget.
pub trait Control {
    /// Shows the aggregate: the value when uniform, a blank or indeterminate state otherwise.
    fn render(&mut self, summary: &AttributeSummary);

    fn read(&self) -> RawControlValue;

    /// Applies one user interaction.
    fn edit(&mut self, edit: &ControlEdit) -> Result<()>;

    fn flags(&self) -> ControlFlags;

    fn flags_mut(&mut self) -> &mut ControlFlags;

    fn is_enabled(&self) -> bool {
        self.flags().enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.flags_mut().enabled = enabled;
    }

    fn is_visible(&self) -> bool {
        self.flags().visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.flags_mut().visible = visible;
    }
}
