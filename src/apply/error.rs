use crate::model::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApplyError>;

/// Failure reported back by the component that records updates for undo.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SinkError {
    #[error("update rejected: {0}")]
    Rejected(String),

    #[error("update failed: {0}")]
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplyError {
    #[error("could not build updated formats: {0}")]
    Core(#[from] CoreError),

    #[error("update sink error: {0}")]
    Sink(#[from] SinkError),
}
