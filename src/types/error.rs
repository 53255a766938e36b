//! Error types for the classic algorithms library.

use thiserror::Error;

/// All errors that can occur in the classic algorithms library.
#[derive(Error, Debug)]
pub enum AlgoError {
    /// A traversal or adjacency lookup referenced a node the graph does not hold.
    #[error("Node {0} not found in graph")]
    NodeNotFound(String),

    /// Counting sort only accepts non-negative integers.
    #[error("Negative value {value} at index {index} cannot be counted")]
    NegativeValue { index: usize, value: i64 },

    /// Counting sort histogram would exceed the allowed range.
    #[error("Counting range too large: max value {max} > {limit}")]
    RangeTooLarge { max: i64, limit: usize },

    /// An edge specification could not be parsed.
    #[error("Invalid edge specification: {0}")]
    InvalidEdge(String),

    /// A value could not be parsed as an integer.
    #[error("Invalid integer: {0}")]
    InvalidNumber(String),

    /// Unknown sort algorithm name.
    #[error("Unknown sort algorithm: {0}")]
    UnknownAlgorithm(String),

    /// JSON rendering error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for library operations.
pub type AlgoResult<T> = Result<T, AlgoError>;
