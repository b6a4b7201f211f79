mod error;
mod execute;
mod io;
mod report;
mod script;

#[cfg(test)]
mod tests;

pub use error::{Result, WorkflowError};
pub use execute::run_script;
pub use io::{load_catalog, load_formats, load_script, save_report};
pub use report::{SessionReport, StepReport};
pub use script::{DialogKind, EditScript, ScriptStep};
