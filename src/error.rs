use thiserror::Error;

use crate::exec::ExecError;

/// Unified error type for image-tag operations
#[derive(Error, Debug)]
pub enum TagError {
    #[error("determining repo state: {0}")]
    StatusQuery(#[source] ExecError),

    #[error("determining git diff: {0}")]
    DiffQuery(#[source] ExecError),

    #[error("determining current git commit: {0}")]
    CommitQuery(#[source] ExecError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in image-tag
pub type Result<T> = std::result::Result<T, TagError>;

impl TagError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TagError::Config(msg.into())
    }
}
