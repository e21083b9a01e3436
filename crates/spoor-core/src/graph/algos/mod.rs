//! Shortest-path algorithms
//!
//! Each algorithm is a method on [`Graph`](crate::graph::Graph):
//! - Dijkstra for single-source paths over non-negative weights
//! - Bellman-Ford for single-source paths with negative weights
//! - Floyd-Warshall for all-pairs paths with negative-cycle detection

pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;

pub use dijkstra::ShortestPaths;
pub use floyd_warshall::DistanceMatrix;
