//! Classic in-memory algorithms.
//!
//! An undirected adjacency-list graph with breadth-first (depth bounded) and
//! depth-first traversal, plus five sort algorithms instrumented with
//! operation counters.

pub mod cli;
pub mod graph;
pub mod sort;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{bfs, dfs, Graph, GraphBuilder};
pub use sort::{
    bubble_sort, counting_sort, insertion_sort, merge, merge_sort, partition, quick_sort,
    SortAlgorithm,
};
pub use types::{AlgoError, AlgoResult, RuntimeStats, DEFAULT_MAX_DEPTH, MAX_COUNTING_RANGE};
