use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    #[error("unknown status code: {0:?}")]
    UnknownStatusCode(String),
    #[error("unknown file kind: {0:?}")]
    UnknownFileKind(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
