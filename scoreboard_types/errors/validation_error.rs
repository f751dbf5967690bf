use thiserror::Error;

/// Client input faults, detected before any store interaction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name and score are required")]
    MissingNameOrScore,

    #[error("Score is required")]
    MissingScore,

    #[error("Score must be an integer")]
    ScoreNotInteger,

    #[error("Score must be a positive integer")]
    NegativeScore,

    #[error("{0}")]
    MalformedBody(String),
}
