use thiserror::Error;

/// Errors for the external row-store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database not configured")]
    NotConfigured,

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-success status. `message` is forwarded as-is.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Unexpected response from store: {0}")]
    Decode(#[source] serde_json::Error),
}
