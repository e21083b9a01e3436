//! `spoor bellman-ford` command - single-source shortest distances
//!
//! Loads a CSV edge list and prints the Bellman-Ford distance from the
//! source vertex to every vertex, one `vertex: distance` line each, in
//! vertex insertion order. Unreachable vertices print `inf`; vertices
//! on or downstream of a negative cycle print `-inf`.

use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, ColumnArgs, OutputFormat};
use crate::commands::helpers::json_weight;
use spoor_core::error::Result;
use spoor_core::graph::Graph;

/// Execute the bellman-ford command
pub fn execute(
    cli: &Cli,
    input: &Path,
    source: &str,
    columns: &ColumnArgs,
    start: Instant,
) -> Result<()> {
    let graph = Graph::from_csv_path(input, &columns.to_edge_columns())?;
    let distances = graph.bellman_ford(&source.to_string())?;

    tracing::debug!(elapsed = ?start.elapsed(), vertices = graph.vertex_count(), "bellman_ford");

    match cli.format {
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = graph
                .vertices()
                .iter()
                .map(|v| {
                    serde_json::json!({
                        "vertex": v,
                        "distance": json_weight(distances[v]),
                    })
                })
                .collect();
            let output = serde_json::json!({
                "source": source,
                "distances": entries,
            });
            println!("{:#}", output);
        }
        OutputFormat::Human => {
            for v in graph.vertices() {
                println!("{}: {}", v, distances[v]);
            }
        }
    }

    Ok(())
}
