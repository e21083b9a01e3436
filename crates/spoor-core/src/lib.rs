//! Spoor Core Library
//!
//! Directed weighted graph structure, traversals, and shortest-path
//! algorithms behind the spoor CLI.

pub mod error;
pub mod graph;
pub mod ingest;
pub mod logging;
