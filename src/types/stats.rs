//! Operation counters shared by the sort algorithms.

use serde::Serialize;

/// Step counters accumulated by a sort call.
///
/// The sort functions only ever increment these fields; they never reset them.
/// Reusing one instance across calls therefore accumulates totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RuntimeStats {
    /// Element-to-element comparisons.
    pub comparisons: u64,
    /// Element swaps.
    pub swaps: u64,
    /// Elements written into a result or histogram.
    pub insertions: u64,
    /// Algorithm-specific steps (pairs checked, recursive calls).
    pub operations: u64,
}

impl RuntimeStats {
    /// Create a zeroed set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of every counter.
    pub fn total(&self) -> u64 {
        self.comparisons + self.swaps + self.insertions + self.operations
    }
}

impl std::fmt::Display for RuntimeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "comparisons={}, swaps={}, insertions={}, operations={}",
            self.comparisons, self.swaps, self.insertions, self.operations
        )
    }
}
