use crate::settings::SettingsError;
use crate::workflow::WorkflowError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("script service error: {0}")]
    Workflow(#[from] WorkflowError),

    #[error("settings service error: {0}")]
    Settings(#[from] SettingsError),
}
