use crate::CliOptions;
use colored::*;
use log::info;
use transitgraph::algo::predefined_graphs::create_city_transport_network;
use transitgraph::io::read_network_from_json_file;
use transitgraph::TransitNetwork;

/// Loads the network given by `--input`, or the built-in city transport network.
pub fn load_network(options: &CliOptions) -> crate::Result<TransitNetwork<i64>> {
    let network = if let Some(input) = &options.input {
        info!("Reading network from '{}'", input.display());
        read_network_from_json_file(input)?
    } else {
        info!("Using the built-in city transport network");
        create_city_transport_network()?
    };

    info!(
        "Loaded network with {} stops and {} routes",
        network.node_count(),
        network.edge_count()
    );
    Ok(network)
}

/// Formats a path as `A -> B -> C`.
pub fn format_path(stops: &[&str]) -> String {
    if stops.is_empty() {
        "no path".red().to_string()
    } else {
        stops.join(" -> ")
    }
}

/// Formats a travel time as `<n> minutes`.
pub fn format_distance(distance: Option<i64>) -> String {
    match distance {
        Some(distance) => format!("{} minutes", distance),
        None => "unreachable".red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_distance, format_path};

    #[test]
    fn test_format_path() {
        colored::control::set_override(false);
        assert_eq!(format_path(&["A", "B", "C"]), "A -> B -> C");
        assert_eq!(format_path(&["A"]), "A");
        assert_eq!(format_path(&[]), "no path");
    }

    #[test]
    fn test_format_distance() {
        colored::control::set_override(false);
        assert_eq!(format_distance(Some(25)), "25 minutes");
        assert_eq!(format_distance(None), "unreachable");
    }
}
