use thiserror::Error;

use crate::forms::products::ProductFormError;
use crate::repository::RepositoryError;

/// Result type returned by service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures reported by the service layer to the HTTP handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("request timed out")]
    Timeout,
    #[error("{0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound("Record not found".to_string()),
            RepositoryError::UniqueViolation(message) => ServiceError::Conflict(message),
            RepositoryError::ConcurrencyConflict(message) => {
                log::warn!("Concurrent modification rejected by the store: {message}");
                ServiceError::Internal("Concurrency error occurred".to_string())
            }
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl From<ProductFormError> for ServiceError {
    fn from(err: ProductFormError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
