use crate::util::{format_distance, format_path};
use crate::CliOptions;
use clap::Parser;
use log::{debug, info};
use transitgraph::TransitNetwork;

/// The start stops used if none are given.
pub const DEFAULT_STARTS: [&str; 2] = ["Central Station", "City Hall"];
/// The end stops used if none are given.
pub const DEFAULT_ENDS: [&str; 2] = ["Beach", "Airport"];

#[derive(Parser)]
pub struct ShortestPathsCommand {
    #[clap(
        long = "from",
        help = "A stop to start from, can be given multiple times. Defaults to Central Station and City Hall."
    )]
    pub from: Vec<String>,

    #[clap(
        long = "to",
        help = "A stop to go to, can be given multiple times. Defaults to Beach and Airport."
    )]
    pub to: Vec<String>,
}

/// Computes the shortest paths between all pairs of stops once, and prints the path and total travel time for each combination of the given starts and ends.
pub(crate) fn print_shortest_paths(
    network: &TransitNetwork<i64>,
    starts: &[&str],
    ends: &[&str],
) -> crate::Result<()> {
    // Validate all names before running the computation.
    for stop in starts.iter().chain(ends) {
        network.node_index(stop)?;
    }

    info!("Shortest paths using Dijkstra's algorithm:");
    let all_pairs = network.all_pairs_routes();
    debug!("Computed routes from {} stops", all_pairs.len());

    for &start in starts {
        for &end in ends {
            let route = if start == end {
                network.shortest_path(start, end)?
            } else {
                all_pairs[start][end].clone()
            };

            info!("");
            info!("Shortest path from {} to {}:", start, end);
            info!("Path: {}", format_path(&route.stops));
            info!("Total distance: {}", format_distance(route.distance));
        }
    }

    Ok(())
}

pub(crate) fn compute_shortest_paths(
    options: &CliOptions,
    subcommand: &ShortestPathsCommand,
) -> crate::Result<()> {
    let network = crate::util::load_network(options)?;

    let starts: Vec<&str> = if subcommand.from.is_empty() {
        DEFAULT_STARTS.to_vec()
    } else {
        subcommand.from.iter().map(String::as_str).collect()
    };
    let ends: Vec<&str> = if subcommand.to.is_empty() {
        DEFAULT_ENDS.to_vec()
    } else {
        subcommand.to.iter().map(String::as_str).collect()
    };

    print_shortest_paths(&network, &starts, &ends)
}
