/// Error types for the portfolio core library
use thiserror::Error;

/// Main error type for portfolio core operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Response body was not the expected JSON
    #[error("Failed to decode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Vote tally array had the wrong number of entries
    #[error("Vote tally must have exactly 2 entries, found {0}")]
    TallyLength(usize),

    /// A vote tally entry was not a non-negative integer
    #[error("Invalid vote count: {0}")]
    InvalidVoteCount(String),

    /// Dog name outside of the two candidates
    #[error("Unknown dog: {0}")]
    UnknownDog(String),

    /// Question count selector value was not a positive integer
    #[error("Invalid question count: {0}")]
    InvalidQuestionCount(String),

    /// Site configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Type alias for Results using PortfolioError
pub type Result<T> = std::result::Result<T, PortfolioError>;
