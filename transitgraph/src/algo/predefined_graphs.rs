use crate::error::Result;
use crate::interface::DynamicGraph;
use crate::network::TransitNetwork;
use rand::Rng;

/// The stops of the sample city transport network, in insertion order.
pub const CITY_STOPS: [&str; 10] = [
    "Central Station",
    "City Hall",
    "Shopping Mall",
    "University",
    "Hospital",
    "Park",
    "Sports Center",
    "Airport",
    "Beach",
    "Industrial Zone",
];

/// The routes of the sample city transport network with their travel time in minutes.
pub const CITY_ROUTES: [(&str, &str, i64); 14] = [
    ("Central Station", "City Hall", 5),
    ("Central Station", "Shopping Mall", 8),
    ("City Hall", "University", 6),
    ("Shopping Mall", "Hospital", 7),
    ("University", "Park", 4),
    ("Hospital", "Sports Center", 9),
    ("Park", "Airport", 12),
    ("Sports Center", "Beach", 10),
    ("Airport", "Industrial Zone", 15),
    ("Beach", "Industrial Zone", 8),
    ("Central Station", "Airport", 20),
    ("City Hall", "Sports Center", 11),
    ("Shopping Mall", "Park", 9),
    ("University", "Beach", 14),
];

/// Creates the sample city transport network with ten stops and fourteen routes.
pub fn create_city_transport_network() -> Result<TransitNetwork<i64>> {
    TransitNetwork::new(CITY_STOPS, CITY_ROUTES)
}

/// Adds a random graph with the given amount of nodes to the given graph.
/// Assumes that the graph is empty.
/// Each unordered pair of distinct nodes is connected with probability `edge_probability`, with a weight drawn uniformly from `0..=max_weight`.
///
/// Panics if `edge_probability` is not in `[0, 1]`.
pub fn create_random_graph<Graph: DynamicGraph, Random: Rng>(
    graph: &mut Graph,
    node_amount: usize,
    edge_probability: f64,
    max_weight: u32,
    random: &mut Random,
) where
    Graph::NodeData: Default,
    Graph::EdgeData: From<u32>,
{
    let nodes: Vec<_> = (0..node_amount)
        .map(|_| graph.add_node(Default::default()))
        .collect();

    for (offset, &n1) in nodes.iter().enumerate() {
        for &n2 in nodes.iter().skip(offset + 1) {
            if random.gen_bool(edge_probability) {
                let weight = random.gen_range(0..=max_weight);
                graph.add_edge(n1, n2, weight.into());
            }
        }
    }
}

/// Creates a random transit network with stops named `Stop 0`, `Stop 1`, and so on, zero-padded to equal length.
/// Routes are chosen as in [`create_random_graph`].
///
/// Panics if `edge_probability` is not in `[0, 1]`.
pub fn create_random_network<Random: Rng>(
    node_amount: usize,
    edge_probability: f64,
    max_weight: u32,
    random: &mut Random,
) -> Result<TransitNetwork<i64>> {
    let width = node_amount.saturating_sub(1).to_string().len();
    let names: Vec<_> = (0..node_amount)
        .map(|index| format!("Stop {:0width$}", index, width = width))
        .collect();

    let mut routes = Vec::new();
    for (offset, from) in names.iter().enumerate() {
        for to in names.iter().skip(offset + 1) {
            if random.gen_bool(edge_probability) {
                let weight = i64::from(random.gen_range(0..=max_weight));
                routes.push((from.as_str(), to.as_str(), weight));
            }
        }
    }

    TransitNetwork::new(names.iter().cloned(), routes)
}
