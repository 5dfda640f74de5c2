use crate::analyse::print_network_analysis;
use crate::path::print_dfs_and_bfs_paths;
use crate::shortest_paths::{print_shortest_paths, DEFAULT_ENDS, DEFAULT_STARTS};
use crate::CliOptions;
use clap::Parser;
use log::info;

#[derive(Parser)]
pub struct DemoCommand {
    #[clap(
        long,
        default_value = "Central Station",
        help = "The start stop for the DFS and BFS paths"
    )]
    pub start: String,

    #[clap(
        long,
        default_value = "Beach",
        help = "The end stop for the DFS and BFS paths"
    )]
    pub end: String,
}

pub(crate) fn demo(options: &CliOptions, subcommand: &DemoCommand) -> crate::Result<()> {
    let network = crate::util::load_network(options)?;

    print_network_analysis(&network, false)?;
    print_dfs_and_bfs_paths(&network, &subcommand.start, &subcommand.end)?;
    info!("");
    print_shortest_paths(&network, &DEFAULT_STARTS, &DEFAULT_ENDS)
}
