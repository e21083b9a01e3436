//! Edge-list ingestion from delimited files
//!
//! Loads a directed graph from CSV rows with a header. Column names
//! are configurable; the weight column is optional and missing or
//! empty weight fields fall back to
//! [`DEFAULT_WEIGHT`](crate::graph::DEFAULT_WEIGHT).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SpoorError};
use crate::graph::{Graph, DEFAULT_WEIGHT};

/// Column names used to pull edges out of a delimited file.
#[derive(Debug, Clone)]
pub struct EdgeColumns {
    /// Column holding the edge source vertex
    pub source: String,
    /// Column holding the edge destination vertex
    pub destination: String,
    /// Column holding the edge weight; `None` ignores weights entirely
    pub weight: Option<String>,
}

impl Default for EdgeColumns {
    fn default() -> Self {
        Self {
            source: "source".to_string(),
            destination: "destination".to_string(),
            weight: Some("weight".to_string()),
        }
    }
}

impl Graph<String> {
    /// Load a graph from the CSV file at `path`
    pub fn from_csv_path(path: impl AsRef<Path>, columns: &EdgeColumns) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let graph = Self::from_csv_reader(file, columns)?;
        debug!(
            path = %path.as_ref().display(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph loaded"
        );
        Ok(graph)
    }

    /// Load a graph from CSV text on any reader.
    ///
    /// The first row must be a header containing the configured source
    /// and destination columns; a configured weight column absent from
    /// the header defaults every weight instead of failing. Rows are
    /// applied in file order, so under the first-write-wins rule of
    /// [`Graph::add_edge`] the first occurrence of a (source,
    /// destination) pair sets the weight, while both endpoints of every
    /// row are still registered as vertices.
    pub fn from_csv_reader(reader: impl Read, columns: &EdgeColumns) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let source_idx = find_column(&headers, &columns.source)?;
        let destination_idx = find_column(&headers, &columns.destination)?;
        let weight_idx = match &columns.weight {
            Some(name) => {
                let idx = headers.iter().position(|h| h == name);
                if idx.is_none() {
                    debug!(column = %name, "weight column absent, using default weight");
                }
                idx
            }
            None => None,
        };

        let mut graph = Graph::new();
        for (row, record) in csv_reader.records().enumerate() {
            let record = record?;
            let source = field(&record, source_idx);
            let destination = field(&record, destination_idx);
            let weight = match weight_idx.and_then(|idx| record.get(idx)) {
                Some(raw) if !raw.trim().is_empty() => {
                    raw.trim().parse().map_err(|_| SpoorError::InvalidWeight {
                        row: row + 1,
                        value: raw.trim().to_string(),
                    })?
                }
                _ => DEFAULT_WEIGHT,
            };

            graph.add_vertex(source.clone());
            graph.add_vertex(destination.clone());
            graph.add_edge(&source, &destination, weight);
        }

        Ok(graph)
    }
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| SpoorError::MissingColumn {
            column: name.to_string(),
        })
}

fn field(record: &csv::StringRecord, idx: usize) -> String {
    record.get(idx).unwrap_or_default().to_string()
}
