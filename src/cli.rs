//! CLI argument parsing for spoor
//!
//! Uses clap for argument parsing. Global flags: --format, --quiet,
//! --verbose, --log-level, --log-json; column-name overrides are
//! per-command.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};

use spoor_core::error::SpoorError;
use spoor_core::ingest::EdgeColumns;

/// Spoor - shortest-path queries over CSV edge lists
#[derive(Parser, Debug)]
#[command(name = "spoor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug-level logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON events
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Single-source shortest distances from a CSV edge list
    BellmanFord {
        /// CSV edge-list file
        input: PathBuf,

        /// Source vertex
        source: String,

        #[command(flatten)]
        columns: ColumnArgs,
    },

    /// All-pairs shortest paths from a CSV edge list
    FloydWarshall {
        /// CSV edge-list file
        input: PathBuf,

        #[command(flatten)]
        columns: ColumnArgs,
    },
}

/// Column-name overrides for edge-list ingestion
#[derive(Args, Debug, Clone)]
pub struct ColumnArgs {
    /// Header column holding the edge source
    #[arg(long, default_value = "source")]
    pub source_column: String,

    /// Header column holding the edge destination
    #[arg(long, default_value = "destination")]
    pub destination_column: String,

    /// Header column holding the edge weight
    #[arg(long, default_value = "weight")]
    pub weight_column: String,
}

impl ColumnArgs {
    /// Convert the CLI flags into ingestion column configuration
    pub fn to_edge_columns(&self) -> EdgeColumns {
        EdgeColumns {
            source: self.source_column.clone(),
            destination: self.destination_column.clone(),
            weight: Some(self.weight_column.clone()),
        }
    }
}

/// Output format for spoor commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = SpoorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(SpoorError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

// Implement ValueEnum for OutputFormat to work with clap
impl ValueEnum for OutputFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[OutputFormat::Human, OutputFormat::Json]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            OutputFormat::Human => Some(clap::builder::PossibleValue::new("human")),
            OutputFormat::Json => Some(clap::builder::PossibleValue::new("json")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_help() {
        // Should not panic
        let result = Cli::try_parse_from(["spoor", "--help"]);
        assert!(result.is_err()); // --help exits
    }

    #[test]
    fn test_parse_cli_version() {
        // Should not panic
        let result = Cli::try_parse_from(["spoor", "--version"]);
        assert!(result.is_err()); // --version exits
    }

    #[test]
    fn test_parse_bellman_ford() {
        let cli = Cli::try_parse_from(["spoor", "bellman-ford", "edges.csv", "A"]).unwrap();
        if let Commands::BellmanFord {
            input,
            source,
            columns,
        } = cli.command
        {
            assert_eq!(input, PathBuf::from("edges.csv"));
            assert_eq!(source, "A");
            assert_eq!(columns.source_column, "source");
            assert_eq!(columns.destination_column, "destination");
            assert_eq!(columns.weight_column, "weight");
        } else {
            panic!("Expected BellmanFord command");
        }
    }

    #[test]
    fn test_parse_floyd_warshall_with_columns() {
        let cli = Cli::try_parse_from([
            "spoor",
            "floyd-warshall",
            "edges.csv",
            "--source-column",
            "from",
            "--weight-column",
            "cost",
        ])
        .unwrap();
        if let Commands::FloydWarshall { columns, .. } = cli.command {
            let edge_columns = columns.to_edge_columns();
            assert_eq!(edge_columns.source, "from");
            assert_eq!(edge_columns.destination, "destination");
            assert_eq!(edge_columns.weight.as_deref(), Some("cost"));
        } else {
            panic!("Expected FloydWarshall command");
        }
    }

    #[test]
    fn test_parse_format() {
        let cli =
            Cli::try_parse_from(["spoor", "--format", "json", "floyd-warshall", "e.csv"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_requires_subcommand() {
        let result = Cli::try_parse_from(["spoor"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_bellman_ford_requires_source() {
        let result = Cli::try_parse_from(["spoor", "bellman-ford", "edges.csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("human".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "records".parse::<OutputFormat>(),
            Err(SpoorError::UnknownFormat(_))
        ));
    }
}
