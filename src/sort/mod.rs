//! Instrumented sort algorithms.
//!
//! Every function takes a [`RuntimeStats`](crate::types::RuntimeStats) by
//! mutable reference and only ever increments it.

pub mod counting;
pub mod merge;
pub mod quadratic;
pub mod quick;

pub use counting::counting_sort;
pub use merge::{merge, merge_sort};
pub use quadratic::{bubble_sort, insertion_sort};
pub use quick::{partition, quick_sort};

use serde::Serialize;

/// The sort algorithms provided by this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    /// Pairwise exchange sort.
    Bubble,
    /// Swap-based prefix sort.
    Insertion,
    /// Top-down merge sort (returns a new vector).
    Merge,
    /// Lomuto quicksort.
    Quick,
    /// Histogram sort over non-negative integers.
    Counting,
}

impl SortAlgorithm {
    /// All algorithms, in demo order.
    pub const ALL: [SortAlgorithm; 5] = [
        Self::Bubble,
        Self::Insertion,
        Self::Merge,
        Self::Quick,
        Self::Counting,
    ];

    /// Return a human-readable name for this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Counting => "counting",
        }
    }

    /// Parse an algorithm from its name, with or without a `_sort` suffix.
    pub fn from_name(name: &str) -> Option<Self> {
        let lowered = name.to_lowercase();
        match lowered.strip_suffix("_sort").unwrap_or(lowered.as_str()) {
            "bubble" => Some(Self::Bubble),
            "insertion" => Some(Self::Insertion),
            "merge" => Some(Self::Merge),
            "quick" => Some(Self::Quick),
            "counting" => Some(Self::Counting),
            _ => None,
        }
    }

    /// Textbook time complexity.
    pub fn complexity(&self) -> &'static str {
        match self {
            Self::Bubble | Self::Insertion => "O(n^2)",
            Self::Merge | Self::Quick => "O(n * log(n))",
            Self::Counting => "O(n + k)",
        }
    }

    /// Whether the algorithm sorts integers rather than strings.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Quick | Self::Counting)
    }
}

impl std::fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_sort", self.name())
    }
}
