use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid {kind} identifier: {value:?}")]
    InvalidId { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
