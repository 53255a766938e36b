//! In-memory undirected graph and its traversals.

pub mod adjacency;
pub mod builder;
pub mod traversal;

pub use adjacency::Graph;
pub use builder::GraphBuilder;
pub use traversal::{bfs, dfs};
