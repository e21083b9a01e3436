//! Command dispatch logic for spoor

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use spoor_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        Commands::BellmanFord {
            input,
            source,
            columns,
        } => commands::bellman_ford::execute(cli, input, source, columns, start),

        Commands::FloydWarshall { input, columns } => {
            commands::floyd_warshall::execute(cli, input, columns, start)
        }
    }
}
