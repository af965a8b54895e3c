//! Error types for table export.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to quote field: {0}")]
    Quote(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;
