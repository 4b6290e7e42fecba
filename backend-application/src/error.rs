use thiserror::Error;

use backend_domain::{DomainError, StorageError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("storage unavailable, retry later: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Duplicate { .. } | StorageError::Conflict => {
                AppError::Conflict(err.to_string())
            }
            StorageError::Unavailable(msg) => AppError::Unavailable(msg),
            StorageError::Other(inner) => AppError::Internal(inner),
        }
    }
}
