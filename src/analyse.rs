use crate::CliOptions;
use clap::Parser;
use colored::*;
use log::{info, warn};
use transitgraph::TransitNetwork;

#[derive(Parser)]
pub struct AnalyseCommand {
    #[clap(long, help = "Also list the stops of each connected component")]
    pub components: bool,
}

pub(crate) fn print_network_analysis(
    network: &TransitNetwork<i64>,
    list_components: bool,
) -> crate::Result<()> {
    info!("");
    info!(" === Network Analysis === ");
    info!("");
    info!("Number of stops: {}", network.node_count());
    info!("Number of routes: {}", network.edge_count());
    info!("Total travel time of all routes: {} minutes", network.total_weight());

    info!("");
    info!("Stop degrees:");
    let mut degrees = Vec::new();
    for stop in network.nodes() {
        let degree = network.degree(stop)?;
        info!("{}: {}", stop, degree);
        degrees.push(degree as f64);
    }

    info!("");
    if degrees.is_empty() {
        warn!("The network has no stops");
    } else {
        info!("Average degree: {:.2}", statistical::mean(&degrees));
        if let (Some(min), Some(max)) = (
            degrees.iter().cloned().reduce(f64::min),
            degrees.iter().cloned().reduce(f64::max),
        ) {
            info!("Minimum degree: {}, maximum degree: {}", min, max);
        }
    }

    let components = network.connected_components();
    if network.is_connected() {
        info!("Is connected: {}", "yes".green());
    } else {
        info!(
            "Is connected: {}, the network has {} connected components",
            "no".red(),
            components.len()
        );
    }

    if list_components {
        for (index, component) in components.iter().enumerate() {
            info!("Component {}: {}", index, component.join(", "));
        }
    }

    info!("");
    Ok(())
}

pub(crate) fn analyse(options: &CliOptions, subcommand: &AnalyseCommand) -> crate::Result<()> {
    let network = crate::util::load_network(options)?;
    print_network_analysis(&network, subcommand.components)
}
