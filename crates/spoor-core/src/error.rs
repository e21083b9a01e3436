//! Error types and exit codes for spoor
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unusable edge list)

use thiserror::Error;

/// Exit codes reported by the spoor binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing column, malformed weight (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during spoor operations
#[derive(Error, Debug)]
pub enum SpoorError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    // Data errors (exit code 3)
    #[error("column not found in header: {column}")]
    MissingColumn { column: String },

    #[error("invalid weight in row {row}: {value}")]
    InvalidWeight { row: usize, value: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("vertex not found: {vertex}")]
    VertexNotFound { vertex: String },

    #[error("edge not found: {from} -> {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("negative cycle detected")]
    NegativeCycle,
}

impl SpoorError {
    /// Create a lookup error for a vertex missing from the graph
    pub fn vertex_not_found(vertex: impl std::fmt::Debug) -> Self {
        SpoorError::VertexNotFound {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create a lookup error for an edge missing from the graph
    pub fn edge_not_found(from: impl std::fmt::Debug, to: impl std::fmt::Debug) -> Self {
        SpoorError::EdgeNotFound {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            SpoorError::UnknownFormat(_) => ExitCode::Usage,

            // Data errors
            SpoorError::MissingColumn { .. }
            | SpoorError::InvalidWeight { .. }
            | SpoorError::Csv(_) => ExitCode::Data,

            // Generic failures
            SpoorError::Io(_)
            | SpoorError::VertexNotFound { .. }
            | SpoorError::EdgeNotFound { .. }
            | SpoorError::NegativeCycle => ExitCode::Failure,
        }
    }
}

/// Result type alias for spoor operations
pub type Result<T> = std::result::Result<T, SpoorError>;
