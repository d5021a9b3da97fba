use thiserror::Error;

/// Custom error type for fund-related operations
#[derive(Debug, Error)]
pub enum FundError {
    #[error("Fund not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}
