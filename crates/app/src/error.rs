use complytrack_core::error::CoreError;
use complytrack_store::StoreError;

/// Application-level error type for service operations.
///
/// Wraps [`CoreError`] for domain errors (not-found, validation, forbidden)
/// and [`StoreError`] for storage bootstrap failures. Routine persistence
/// failures after a mutation are logged, not returned; the in-memory state
/// stays authoritative for the session.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Convenience type alias for service return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Whether this error is the non-fatal "referenced entity does not
    /// resolve" condition, shown to the user as a message.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::Core(CoreError::NotFound { .. }))
    }
}
