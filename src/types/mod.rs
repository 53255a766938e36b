//! Shared data types for the classic algorithms library.

pub mod error;
pub mod stats;

pub use error::{AlgoError, AlgoResult};
pub use stats::RuntimeStats;

/// Maximum number of histogram buckets counting sort will allocate (16M).
pub const MAX_COUNTING_RANGE: usize = 1 << 24;

/// Depth bound used by the CLI when `--max-depth` is not given.
pub const DEFAULT_MAX_DEPTH: i64 = 5;
