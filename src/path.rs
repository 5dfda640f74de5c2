use crate::util::format_path;
use crate::CliOptions;
use clap::{ArgEnum, Parser};
use colored::*;
use log::info;
use transitgraph::TransitNetwork;

#[derive(ArgEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathAlgorithm {
    Dfs,
    Bfs,
    Both,
}

#[derive(Parser)]
pub struct PathCommand {
    /// The stop to start from.
    pub start: String,

    /// The stop to go to.
    pub end: String,

    #[clap(
        arg_enum,
        short,
        long,
        default_value = "both",
        help = "The search used to find the path. DFS finds some path, BFS finds a path with the fewest routes."
    )]
    pub algorithm: PathAlgorithm,
}

/// Prints the DFS and BFS paths from `start` to `end`, and explains the difference if they differ.
pub(crate) fn print_dfs_and_bfs_paths(
    network: &TransitNetwork<i64>,
    start: &str,
    end: &str,
) -> crate::Result<()> {
    info!("Finding path from {} to {}:", start, end);
    let dfs_path = network.dfs_path(start, end)?;
    let bfs_path = network.bfs_path(start, end)?;
    info!("DFS path: {}", format_path(&dfs_path));
    info!("BFS path: {}", format_path(&bfs_path));

    if dfs_path != bfs_path {
        info!("");
        info!("{}", "DFS and BFS returned different paths.".yellow());
        info!("DFS searches in depth first and may find a longer path than necessary.");
        info!("BFS searches in breadth first and therefore always finds a path with the fewest routes.");
    }
    Ok(())
}

pub(crate) fn find_path(options: &CliOptions, subcommand: &PathCommand) -> crate::Result<()> {
    let network = crate::util::load_network(options)?;
    let (start, end) = (subcommand.start.as_str(), subcommand.end.as_str());

    match subcommand.algorithm {
        PathAlgorithm::Dfs => {
            let path = network.dfs_path(start, end)?;
            info!("DFS path from {} to {}: {}", start, end, format_path(&path));
        }
        PathAlgorithm::Bfs => {
            let path = network.bfs_path(start, end)?;
            info!("BFS path from {} to {}: {}", start, end, format_path(&path));
        }
        PathAlgorithm::Both => print_dfs_and_bfs_paths(&network, start, end)?,
    }

    Ok(())
}
