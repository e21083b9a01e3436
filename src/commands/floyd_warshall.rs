//! `spoor floyd-warshall` command - all-pairs shortest paths
//!
//! Loads a CSV edge list and prints, for every source vertex, a
//! `source: X` line followed by the shortest path to each destination
//! as `v1 -> v2 -> ... -> vn (distance)`, with a blank line between
//! sources. Destinations print in vertex insertion order; an
//! unreachable destination prints alone with `(inf)`.

use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, ColumnArgs, OutputFormat};
use crate::commands::helpers::json_weight;
use spoor_core::error::Result;
use spoor_core::graph::Graph;

/// Execute the floyd-warshall command
pub fn execute(cli: &Cli, input: &Path, columns: &ColumnArgs, start: Instant) -> Result<()> {
    let graph = Graph::from_csv_path(input, &columns.to_edge_columns())?;
    let matrix = graph.floyd_warshall()?;

    tracing::debug!(elapsed = ?start.elapsed(), vertices = graph.vertex_count(), "floyd_warshall");

    match cli.format {
        OutputFormat::Json => {
            let sources: Vec<serde_json::Value> = graph
                .vertices()
                .iter()
                .map(|source| {
                    let paths: Vec<serde_json::Value> = graph
                        .vertices()
                        .iter()
                        .map(|dest| {
                            serde_json::json!({
                                "destination": dest,
                                "distance": json_weight(matrix.distances[source][dest]),
                                "path": matrix.path(source, dest),
                            })
                        })
                        .collect();
                    serde_json::json!({
                        "source": source,
                        "paths": paths,
                    })
                })
                .collect();
            let output = serde_json::json!({ "sources": sources });
            println!("{:#}", output);
        }
        OutputFormat::Human => {
            for (i, source) in graph.vertices().iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("source: {}", source);
                for dest in graph.vertices() {
                    let chain = matrix.path(source, dest).join(" -> ");
                    println!("{} ({})", chain, matrix.distances[source][dest]);
                }
            }
        }
    }

    Ok(())
}
