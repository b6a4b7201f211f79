use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::aggregate::AttributeReport;
use crate::dialogs::SessionState;
use crate::settings::DialogPreferences;

use super::DialogKind;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepReport {
    pub step: String,
    pub duration_ms: u128,
    pub state: SessionState,
    pub commit_enabled: bool,
    /// Attributes the dialog considered changed after the step.
    pub changed: Vec<String>,
    /// Objects written by a commit step.
    pub updated: usize,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionReport {
    pub script_name: Option<String>,
    pub dialog: DialogKind,
    pub steps: Vec<StepReport>,
    pub final_state: SessionState,
    /// One entry per sink call, each mapping object ids to their new format.
    pub issued: Vec<Value>,
    pub final_selection: Value,
    pub aggregate: Vec<AttributeReport>,
    pub preferences: DialogPreferences,
}

impl SessionReport {
    pub fn failed_steps(&self) -> usize {
        self.steps.iter().filter(|step| step.error.is_some()).count()
    }
}
