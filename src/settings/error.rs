use thiserror::Error;

pub type Result<T> = std::result::Result<T, SettingsError>;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings serialization failure: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("settings group name must not be empty")]
    EmptyGroup,
}
