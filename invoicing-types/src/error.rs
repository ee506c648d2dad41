//! Error types for the invoicing service.

/// Domain-level errors (business rule violations).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// A zero-amount invoice that already carries payments. Contradictory
    /// upstream data, surfaced rather than handled as a business outcome.
    #[error("The invoice is in an invalid state.")]
    InvalidState,

    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("Invoice reference cannot be empty")]
    EmptyReference,
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Entity not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Application-level errors surfaced to embedding hosts.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidState(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidState => AppError::InvalidState(err.to_string()),
            DomainError::NegativeAmount | DomainError::EmptyReference => {
                AppError::BadRequest(err.to_string())
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Domain(e) => e.into(),
            RepoError::NotFound => AppError::NotFound("Resource not found".into()),
            RepoError::Conflict(e) => AppError::BadRequest(e),
            RepoError::Storage(e) => AppError::Internal(e),
        }
    }
}
