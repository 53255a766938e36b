//! Graph traversal algorithms (BFS, DFS).

use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use crate::types::AlgoResult;

use super::Graph;

/// Whether a node at `depth` may be emitted under `max_depth`. Negative bounds admit nothing.
fn within_depth(depth: usize, max_depth: i64) -> bool {
    usize::try_from(max_depth).is_ok_and(|max| depth <= max)
}

/// Breadth-first traversal from `start`, bounded by `max_depth` hops.
///
/// Returns nodes in dequeue order, restricted to those whose BFS depth is at
/// most `max_depth`. Neighbors are enqueued as soon as their parent is
/// expanded, even when their own depth already exceeds the bound; such nodes
/// are dequeued later and skipped without being emitted or expanded.
pub fn bfs<'a, T>(graph: &'a Graph<T>, start: &'a T, max_depth: i64) -> AlgoResult<Vec<T>>
where
    T: Eq + Hash + Clone + Debug,
{
    graph.neighbors(start)?;

    let mut visited: HashSet<&T> = HashSet::new();
    let mut visited_order: Vec<T> = Vec::new();
    let mut queue: VecDeque<(&T, usize)> = VecDeque::new();

    visited.insert(start);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        if !within_depth(depth, max_depth) {
            continue;
        }

        for adjacent in graph.neighbors(current)? {
            if visited.insert(adjacent) {
                queue.push_back((adjacent, depth + 1));
            }
        }

        visited_order.push(current.clone());
    }

    log::debug!(
        "bfs from {:?} (max_depth={}) visited {} of {} nodes",
        start,
        max_depth,
        visited_order.len(),
        graph.node_count()
    );
    Ok(visited_order)
}

/// Depth-first traversal from `start` using an explicit stack.
///
/// All unvisited neighbors of a node are pushed before the next pop, so
/// siblings come out in reverse adjacency order. This differs from recursive
/// DFS and is part of the observable result.
pub fn dfs<'a, T>(graph: &'a Graph<T>, start: &'a T) -> AlgoResult<Vec<T>>
where
    T: Eq + Hash + Clone + Debug,
{
    graph.neighbors(start)?;

    let mut visited: HashSet<&T> = HashSet::new();
    let mut visited_order: Vec<T> = Vec::new();
    let mut stack: Vec<&T> = Vec::new();

    visited.insert(start);
    stack.push(start);

    while let Some(current) = stack.pop() {
        for adjacent in graph.neighbors(current)? {
            if visited.insert(adjacent) {
                stack.push(adjacent);
            }
        }

        visited_order.push(current.clone());
    }

    log::debug!(
        "dfs from {:?} visited {} of {} nodes",
        start,
        visited_order.len(),
        graph.node_count()
    );
    Ok(visited_order)
}
