use thiserror::Error;

/// Errors shared across the revenue workspace.
#[derive(Debug, Error)]
pub enum RevenueError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
