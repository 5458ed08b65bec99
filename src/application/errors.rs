use thiserror::Error;

use crate::core::ports::StoreError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("shipment not found")]
    NotFound,

    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for ApplicationError {
    /// A missing record is a domain outcome, not a backend failure.
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApplicationError::NotFound,
            other => ApplicationError::Store(other),
        }
    }
}
