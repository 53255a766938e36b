//! CLI command implementations.

use serde::Serialize;

use crate::graph::{bfs, dfs, Graph, GraphBuilder};
use crate::sort::{
    bubble_sort, counting_sort, insertion_sort, merge_sort, quick_sort, SortAlgorithm,
};
use crate::types::{AlgoError, AlgoResult, RuntimeStats};

/// Edges of the demonstration graph.
pub const DEMO_EDGES: &str = "0-1,0-4,1-2,1-3,1-4,2-3,3-4";

/// Outcome of one sort invocation, as rendered by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct SortReport {
    pub algorithm: SortAlgorithm,
    pub complexity: &'static str,
    pub sorted: Vec<String>,
    pub stats: RuntimeStats,
}

impl std::fmt::Display for SortReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sorted list=[{}], {}", self.sorted.join(", "), self.stats)
    }
}

/// Build a graph from a comma-separated edge list, or the demo graph when none is given.
pub fn load_graph(edges: Option<&str>) -> AlgoResult<Graph<String>> {
    let builder = GraphBuilder::from_spec(edges.unwrap_or(DEMO_EDGES))?;
    Ok(builder.build())
}

/// Parse every value as an integer.
pub fn parse_integers(values: &[String]) -> AlgoResult<Vec<i64>> {
    values
        .iter()
        .map(|v| {
            v.trim()
                .parse::<i64>()
                .map_err(|_| AlgoError::InvalidNumber(v.clone()))
        })
        .collect()
}

/// Run `algorithm` over `values` with a fresh stats accumulator.
///
/// Quick and counting sort parse the values as integers; the others sort them as strings.
pub fn run_sort(algorithm: SortAlgorithm, values: &[String]) -> AlgoResult<SortReport> {
    let mut stats = RuntimeStats::new();

    let sorted = if algorithm.is_numeric() {
        let mut numbers = parse_integers(values)?;
        match algorithm {
            SortAlgorithm::Counting => counting_sort(&mut numbers, &mut stats)?,
            _ => quick_sort(&mut numbers, &mut stats),
        }
        numbers.iter().map(i64::to_string).collect()
    } else {
        let mut list = values.to_vec();
        match algorithm {
            SortAlgorithm::Bubble => bubble_sort(&mut list, &mut stats),
            SortAlgorithm::Insertion => insertion_sort(&mut list, &mut stats),
            _ => list = merge_sort(&list, &mut stats),
        }
        list
    };

    log::debug!("{} sorted {} values: {}", algorithm, values.len(), stats);
    Ok(SortReport {
        algorithm,
        complexity: algorithm.complexity(),
        sorted,
        stats,
    })
}

/// Render a traversal order the way the CLI prints it.
pub fn format_order(order: &[String]) -> String {
    order.join(", ")
}

/// Print the adjacency description of a graph.
pub fn cmd_graph(edges: Option<&str>, json: bool) -> AlgoResult<()> {
    let graph = load_graph(edges)?;
    if json {
        let info = serde_json::json!({
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "adjacency": graph,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print!("{}", graph);
    }
    Ok(())
}

/// Run a depth-bounded breadth-first traversal.
pub fn cmd_bfs(edges: Option<&str>, start: &str, max_depth: i64, json: bool) -> AlgoResult<()> {
    let graph = load_graph(edges)?;
    let start = start.to_string();
    let order = bfs(&graph, &start, max_depth)?;
    if json {
        println!(
            "{}",
            serde_json::json!({"start": start, "max_depth": max_depth, "order": order})
        );
    } else {
        println!(
            "bfs_traversal(graph, '{}', {}) = {}",
            start,
            max_depth,
            format_order(&order)
        );
    }
    Ok(())
}

/// Run a depth-first traversal.
pub fn cmd_dfs(edges: Option<&str>, start: &str, json: bool) -> AlgoResult<()> {
    let graph = load_graph(edges)?;
    let start = start.to_string();
    let order = dfs(&graph, &start)?;
    if json {
        println!("{}", serde_json::json!({"start": start, "order": order}));
    } else {
        println!("dfs_traversal(graph, '{}') = {}", start, format_order(&order));
    }
    Ok(())
}

/// Sort values with a named algorithm.
pub fn cmd_sort(algorithm: &str, values: &[String], json: bool) -> AlgoResult<()> {
    let algorithm = SortAlgorithm::from_name(algorithm)
        .ok_or_else(|| AlgoError::UnknownAlgorithm(algorithm.to_string()))?;
    let report = run_sort(algorithm, values)?;
    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

/// Demo inputs for each algorithm.
fn demo_values(algorithm: SortAlgorithm) -> Vec<String> {
    let values: &[&str] = match algorithm {
        SortAlgorithm::Bubble | SortAlgorithm::Insertion => &["x", "d", "c", "b", "a"],
        SortAlgorithm::Merge => &["123", "989", "000", "981", "778", "996", "993", "781"],
        SortAlgorithm::Quick => &["100", "200", "300", "20", "30", "10", "50"],
        SortAlgorithm::Counting => &["100", "200", "15", "30", "10", "50"],
    };
    values.iter().map(|v| v.to_string()).collect()
}

/// Run the full demonstration: graph, traversals and every sort.
pub fn cmd_demo(json: bool) -> AlgoResult<()> {
    let graph = load_graph(None)?;
    let start = "0".to_string();
    let bfs_full = bfs(&graph, &start, 5)?;
    let bfs_near = bfs(&graph, &start, 1)?;
    let dfs_order = dfs(&graph, &start)?;
    let reports = SortAlgorithm::ALL
        .iter()
        .map(|&algorithm| run_sort(algorithm, &demo_values(algorithm)))
        .collect::<AlgoResult<Vec<_>>>()?;

    if json {
        let demo = serde_json::json!({
            "graph": graph,
            "bfs": { "max_depth_5": bfs_full, "max_depth_1": bfs_near },
            "dfs": dfs_order,
            "sorts": reports,
        });
        println!("{}", serde_json::to_string_pretty(&demo)?);
        return Ok(());
    }

    println!("== graphs ==");
    print!("{}", graph);
    println!("== breadth first search traversal ==");
    println!("bfs_traversal(graph, '0', 5) = {}", format_order(&bfs_full));
    println!("bfs_traversal(graph, '0', 1) = {}", format_order(&bfs_near));
    println!("== depth first search traversal ==");
    println!("{}", format_order(&dfs_order));
    for report in &reports {
        println!("== {} {} ==", report.algorithm, report.complexity);
        println!("{}", report);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_integers_rejects_garbage() {
        let result = parse_integers(&strings(&["1", "x2"]));
        match result {
            Err(AlgoError::InvalidNumber(v)) => assert_eq!(v, "x2"),
            other => panic!("Expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_run_sort_numeric_vs_lexicographic() {
        let values = strings(&["10", "9", "100"]);
        let numeric = run_sort(SortAlgorithm::Quick, &values).unwrap();
        assert_eq!(numeric.sorted, strings(&["9", "10", "100"]));

        let lexical = run_sort(SortAlgorithm::Merge, &values).unwrap();
        assert_eq!(lexical.sorted, strings(&["10", "100", "9"]));
    }

    #[test]
    fn test_report_display() {
        let report = run_sort(SortAlgorithm::Counting, &strings(&["3", "1"])).unwrap();
        assert_eq!(
            report.to_string(),
            "sorted list=[1, 3], comparisons=0, swaps=0, insertions=4, operations=0"
        );
    }

    #[test]
    fn test_load_graph_defaults_to_demo() {
        let graph = load_graph(None).unwrap();
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 7);
    }

    #[test]
    fn test_demo_values_cover_every_algorithm() {
        for algorithm in SortAlgorithm::ALL {
            assert!(run_sort(algorithm, &demo_values(algorithm)).is_ok());
        }
    }
}
