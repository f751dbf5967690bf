use thiserror::Error;

pub mod store_error;
pub mod validation_error;

pub use store_error::StoreError;
pub use validation_error::ValidationError;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    /// True when the fault was caused by the client input rather than by us or the store.
    pub fn is_client_fault(&self) -> bool {
        matches!(self, ApplicationError::Validation(_))
    }
}
