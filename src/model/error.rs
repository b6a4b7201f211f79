use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("unknown attribute `{name}` for {schema} format")]
    UnknownAttribute { schema: &'static str, name: String },

    #[error("attribute `{name}` expects a {expected} value but received {actual}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("invalid color `{0}`: expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    #[error("unknown font weight `{0}`")]
    UnknownWeight(String),
}
