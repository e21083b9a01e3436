//! CLI commands for spoor

pub mod bellman_ford;
pub mod dispatch;
pub mod floyd_warshall;
pub mod helpers;
