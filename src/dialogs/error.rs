use crate::apply::{ApplyError, SinkError};
use crate::controls::ControlError;
use crate::model::CoreError;
use crate::settings::SettingsError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DialogError>;

#[derive(Debug, Error)]
pub enum DialogError {
    #[error("dialog is closed")]
    Closed,

    #[error("dialog has not been shown")]
    NotVisible,

    #[error("commit is disabled: no valid change is pending")]
    CommitDisabled,

    #[error("dialog has no control for `{0}`")]
    NoControl(String),

    #[error("reconciler error: {0}")]
    Core(#[from] CoreError),

    #[error("control error: {0}")]
    Control(#[from] ControlError),

    #[error("update sink error: {0}")]
    Sink(#[from] SinkError),

    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
}

impl From<ApplyError> for DialogError {
    fn from(error: ApplyError) -> Self {
        match error {
            ApplyError::Core(error) => Self::Core(error),
            ApplyError::Sink(error) => Self::Sink(error),
        }
    }
}
