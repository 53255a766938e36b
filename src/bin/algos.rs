//! CLI entry point for the `algos` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use classic_algorithms::cli::commands;
use classic_algorithms::{AlgoError, DEFAULT_MAX_DEPTH};

#[derive(Parser)]
#[command(
    name = "algos",
    about = "Classic algorithms: graph traversals and instrumented sorts"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the adjacency list of a graph
    Graph {
        /// Comma-separated edges such as "0-1,0-4" (default: demo graph)
        #[arg(long)]
        edges: Option<String>,
    },
    /// Breadth-first traversal bounded by depth
    Bfs {
        /// Starting node
        start: String,
        /// Maximum depth (negative yields no nodes)
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, allow_hyphen_values = true)]
        max_depth: i64,
        /// Comma-separated edges such as "0-1,0-4" (default: demo graph)
        #[arg(long)]
        edges: Option<String>,
    },
    /// Depth-first traversal
    Dfs {
        /// Starting node
        start: String,
        /// Comma-separated edges such as "0-1,0-4" (default: demo graph)
        #[arg(long)]
        edges: Option<String>,
    },
    /// Sort values with one algorithm
    Sort {
        /// Algorithm: bubble, insertion, merge, quick, counting
        algorithm: String,
        /// Values to sort (integers for quick and counting)
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Run the full demonstration
    Demo,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Graph { edges } => commands::cmd_graph(edges.as_deref(), json),
        Commands::Bfs {
            start,
            max_depth,
            edges,
        } => commands::cmd_bfs(edges.as_deref(), &start, max_depth, json),
        Commands::Dfs { start, edges } => commands::cmd_dfs(edges.as_deref(), &start, json),
        Commands::Sort { algorithm, values } => commands::cmd_sort(&algorithm, &values, json),
        Commands::Demo => commands::cmd_demo(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            AlgoError::InvalidEdge(_)
            | AlgoError::InvalidNumber(_)
            | AlgoError::UnknownAlgorithm(_)
            | AlgoError::NegativeValue { .. }
            | AlgoError::RangeTooLarge { .. } => 2,
            AlgoError::NodeNotFound(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
