use crate::storage::StorageError;

/// Errors shared across the Brightpath client crates.
///
/// Every public operation in this workspace returns failures as values;
/// nothing here is ever surfaced by panicking. Read paths that the UI
/// depends on (notification listing, unread counts) additionally degrade
/// to empty defaults instead of returning an error at all.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("backend request failed: {0}")]
    Backend(#[from] reqwest::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;
