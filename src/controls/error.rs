use thiserror::Error;

pub type Result<T> = std::result::Result<T, ControlError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControlError {
    #[error("{control} does not accept {edit}")]
    UnsupportedEdit {
        control: &'static str,
        edit: &'static str,
    },

    #[error("choice `{0}` is not offered by this combo box")]
    UnknownChoice(String),

    #[error("control is disabled")]
    Disabled,
}
