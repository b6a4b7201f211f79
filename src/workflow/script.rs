use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::controls::ControlEdit;
use crate::model::Selection;
use crate::settings::Geometry;

use super::{Result, WorkflowError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogKind {
    Character,
    Image,
    Plot,
}

impl DialogKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Image => "image",
            Self::Plot => "plot",
        }
    }

    /// Settings group preferences are stored under unless a script names one.
    pub fn settings_group(self) -> &'static str {
        match self {
            Self::Character => "CharacterFormatDialog",
            Self::Image => "ImageFormatDialog",
            Self::Plot => "PlotFormatDialog",
        }
    }
}

impl fmt::Display for DialogKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// One user interaction replayed against a dialog session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum ScriptStep {
    Show,
    /// Replaces the selection; populated now if shown, otherwise on `show`.
    Select { selection: Vec<Value> },
    Edit { attribute: String, edit: ControlEdit },
    Page { page: String },
    Resize { geometry: Geometry },
    Apply,
    Accept,
    Reject,
}

impl ScriptStep {
    pub fn describe(&self) -> String {
        match self {
            Self::Show => "show".to_string(),
            Self::Select { selection } => format!("select {} objects", selection.len()),
            Self::Edit { attribute, edit } => format!("edit {attribute} ({})", edit.name()),
            Self::Page { page } => format!("page {page}"),
            Self::Resize { geometry } => format!("resize {}x{}", geometry.width, geometry.height),
            Self::Apply => "apply".to_string(),
            Self::Accept => "accept".to_string(),
            Self::Reject => "reject".to_string(),
        }
    }
}

/// A selection of formats plus the interactions to replay on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditScript {
    pub name: Option<String>,
    pub dialog: DialogKind,
    /// Formats of the selected objects, shaped like the dialog's format.
    #[serde(default)]
    pub selection: Vec<Value>,
    #[serde(default)]
    pub settings_group: Option<String>,
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

impl EditScript {
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(WorkflowError::Parse(
                "edit script must include at least one step".to_string(),
            ));
        }
        for (index, step) in self.steps.iter().enumerate() {
            match step {
                ScriptStep::Edit { attribute, .. } if attribute.trim().is_empty() => {
                    return Err(WorkflowError::Parse(format!(
                        "edit step at index {index} names no attribute"
                    )));
                }
                ScriptStep::Page { page } if page.trim().is_empty() => {
                    return Err(WorkflowError::Parse(format!(
                        "page step at index {index} has an empty page name"
                    )));
                }
                _ => {}
            }
        }
        if self
            .settings_group
            .as_deref()
            .is_some_and(|group| group.trim().is_empty())
        {
            return Err(WorkflowError::Parse(
                "settings group must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn settings_group(&self) -> &str {
        self.settings_group
            .as_deref()
            .unwrap_or_else(|| self.dialog.settings_group())
    }
}

/// Decodes raw format documents, numbering the objects from 1.
pub(crate) fn decode_selection<F: DeserializeOwned>(values: &[Value]) -> Result<Selection<F>> {
    let formats = values
        .iter()
        .cloned()
        .map(serde_json::from_value)
        .collect::<std::result::Result<Vec<F>, _>>()?;
    Ok(Selection::from_formats(formats))
}
