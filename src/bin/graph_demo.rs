use anyhow::{ensure, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use wgraph::{Graph, SpanningSummary};

/// The 14 weighted edges of the example graph.
const EXAMPLE_EDGES: [(usize, usize, f32); 14] = [
    (0, 1, 4.0),
    (0, 8, 8.0),
    (8, 1, 11.0),
    (3, 1, 8.0),
    (3, 9, 2.0),
    (9, 8, 7.0),
    (7, 8, 1.0),
    (7, 9, 6.0),
    (4, 3, 7.0),
    (3, 6, 4.0),
    (4, 6, 14.0),
    (4, 5, 9.0),
    (5, 6, 10.0),
    (6, 7, 2.0),
];

#[derive(Parser)]
#[command(name = "graph_demo")]
#[command(about = "Builds the example graph, traverses it and prints its minimum spanning forest", long_about = None)]
struct Cli {
    /// Number of vertices to allocate (must cover indices 0..=9)
    #[arg(long, default_value_t = 10)]
    vertices: usize,

    /// Start vertex for the breadth-first search
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Emit a JSON document instead of the text views
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Leave out the adjacency matrices
    #[arg(long, default_value_t = false)]
    skip_matrix: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    graph: &'a Graph,
    bfs_order: Vec<usize>,
    spanning_forest: &'a Graph,
    summary: SpanningSummary,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let graph = Graph::from_edges(cli.vertices, EXAMPLE_EDGES)
        .context("Failed to build the example graph")?;
    ensure!(
        graph.edge_count() == EXAMPLE_EDGES.len(),
        "expected {} edges, found {}",
        EXAMPLE_EDGES.len(),
        graph.edge_count()
    );

    let bfs = graph
        .bfs_report(cli.start)
        .with_context(|| format!("Failed to traverse from vertex {}", cli.start))?;
    let mst = graph.kruskal().context("Failed to compute the spanning forest")?;
    let summary = SpanningSummary::of(&mst);

    if cli.json {
        let report = Report {
            graph: &graph,
            bfs_order: bfs.order,
            spanning_forest: &mst,
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Graph as adjacency list:");
    print!("{}", graph.adjacency_list());

    if !cli.skip_matrix {
        println!("Graph as adjacency matrix:");
        print!("{}", graph.adjacency_matrix());
    }

    println!();
    print!("{bfs}");

    println!("Spanning tree as adjacency list:");
    print!("{}", mst.adjacency_list());

    if !cli.skip_matrix {
        println!("\nSpanning tree as adjacency matrix:");
        print!("{}", mst.adjacency_matrix());
    }

    println!(
        "\n{} edges, total weight {:.2}, {} component(s)",
        summary.edge_count, summary.total_weight, summary.component_count
    );

    Ok(())
}
