//! Undirected adjacency-list graph.

use std::collections::HashMap;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::types::{AlgoError, AlgoResult};

/// An undirected graph stored as per-node adjacency lists.
///
/// Nodes are created implicitly the first time an edge references them and are
/// never removed. Adjacency lists keep edge-insertion order and are not
/// deduplicated, so adding the same edge twice yields a multi-edge.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// Nodes in first-reference order, each paired with its adjacency list.
    entries: Vec<(T, Vec<T>)>,
    /// Node -> position in `entries`.
    index: HashMap<T, usize>,
    /// Number of `add_edge` calls.
    edge_count: usize,
}

impl<T> Graph<T>
where
    T: Eq + Hash + Clone + Debug,
{
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Position of `node` in the entry table, inserting an empty entry if absent.
    fn entry_index(&mut self, node: &T) -> usize {
        if let Some(&idx) = self.index.get(node) {
            return idx;
        }
        let idx = self.entries.len();
        self.entries.push((node.clone(), Vec::new()));
        self.index.insert(node.clone(), idx);
        idx
    }

    /// Add an undirected edge: `dest` joins `src`'s list and `src` joins `dest`'s list.
    ///
    /// Neither self-loops nor duplicate edges are rejected. A self-loop puts the
    /// node into its own list twice.
    pub fn add_edge(&mut self, src: T, dest: T) {
        let src_idx = self.entry_index(&src);
        self.entries[src_idx].1.push(dest.clone());
        let dest_idx = self.entry_index(&dest);
        self.entries[dest_idx].1.push(src);
        self.edge_count += 1;
    }

    /// Adjacency list of `node`, in edge-insertion order.
    pub fn neighbors(&self, node: &T) -> AlgoResult<&[T]> {
        self.index
            .get(node)
            .and_then(|&idx| self.entries.get(idx))
            .map(|(_, adjacent)| adjacent.as_slice())
            .ok_or_else(|| AlgoError::NodeNotFound(format!("{:?}", node)))
    }

    /// Whether `node` has been referenced by any edge.
    pub fn contains(&self, node: &T) -> bool {
        self.index.contains_key(node)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of edges added, multi-edges and self-loops included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Nodes in first-reference order.
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(node, _)| node)
    }

    /// `(node, adjacency)` pairs in first-reference order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &[T])> {
        self.entries
            .iter()
            .map(|(node, adjacent)| (node, adjacent.as_slice()))
    }
}

impl<T> Default for Graph<T>
where
    T: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(T, T)> for Graph<T>
where
    T: Eq + Hash + Clone + Debug,
{
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<T> Extend<(T, T)> for Graph<T>
where
    T: Eq + Hash + Clone + Debug,
{
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, iter: I) {
        for (src, dest) in iter {
            self.add_edge(src, dest);
        }
    }
}

/// One line per node: `<node> -> [<adj1>, <adj2>, ...]`.
impl<T: Display> Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, adjacent) in &self.entries {
            write!(f, "{} -> [", node)?;
            for (i, item) in adjacent.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", item)?;
            }
            f.write_str("]\n")?;
        }
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct AdjacencyEntry<'a, T> {
    node: &'a T,
    adjacent: &'a [T],
}

/// Serialized as an ordered list of `{ "node": .., "adjacent": [..] }` entries.
impl<T: Serialize> Serialize for Graph<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for (node, adjacent) in &self.entries {
            seq.serialize_element(&AdjacencyEntry { node, adjacent })?;
        }
        seq.end()
    }
}
