use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Error taxonomy used by service layer functions. The `Display` text of
/// each variant is the user-facing message; storage and internal detail
/// stays out of it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Malformed or out-of-range input. Carries the joined field messages.
    #[error("{0}")]
    Validation(String),
    /// The slot is structurally closed or overlaps an existing booking.
    #[error("The selected time slot is not available. Please choose a different time or date.")]
    SlotUnavailable,
    /// The computed total was non-positive; a logic defect, not user error.
    #[error("Unable to calculate price.")]
    Pricing,
    /// The data store failed. The field carries detail for the debug
    /// channel only; the display text stays generic.
    #[error("Database error. Please check your connection and try again.")]
    Persistence(String),
    /// Anything uncaught.
    #[error("internal error")]
    Internal,
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::SlotConflict => Self::SlotUnavailable,
            RepositoryError::Validation(message) => Self::Validation(message),
            other => Self::Persistence(other.to_string()),
        }
    }
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
