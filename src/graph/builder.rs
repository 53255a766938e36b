//! Fluent API for building Graph instances.

use std::fmt::Debug;
use std::hash::Hash;

use crate::types::{AlgoError, AlgoResult};

use super::Graph;

/// Fluent builder for constructing a Graph.
pub struct GraphBuilder<T> {
    edges: Vec<(T, T)>,
}

impl<T> GraphBuilder<T>
where
    T: Eq + Hash + Clone + Debug,
{
    /// Create a new builder with no edges.
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Add an undirected edge between two nodes.
    pub fn edge(&mut self, src: T, dest: T) -> &mut Self {
        self.edges.push((src, dest));
        self
    }

    /// Add several edges in order.
    pub fn edges<I>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator<Item = (T, T)>,
    {
        self.edges.extend(edges);
        self
    }

    /// Build the final Graph, inserting edges in the order they were added.
    pub fn build(self) -> Graph<T> {
        self.edges.into_iter().collect()
    }
}

impl GraphBuilder<String> {
    /// Parse a comma-separated edge list such as `"0-1,0-4,1-2"`.
    ///
    /// Whitespace around node names is ignored; empty items are skipped.
    pub fn from_spec(spec: &str) -> AlgoResult<Self> {
        let mut builder = Self::new();
        for item in spec.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let (src, dest) = item
                .split_once('-')
                .ok_or_else(|| AlgoError::InvalidEdge(item.to_string()))?;
            let (src, dest) = (src.trim(), dest.trim());
            if src.is_empty() || dest.is_empty() {
                return Err(AlgoError::InvalidEdge(item.to_string()));
            }
            builder.edge(src.to_string(), dest.to_string());
        }
        Ok(builder)
    }
}

impl<T> Default for GraphBuilder<T>
where
    T: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
