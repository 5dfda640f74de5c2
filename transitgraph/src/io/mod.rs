use crate::algo::dijkstra::DijkstraWeight;
use crate::error::Result;
use crate::network::TransitNetwork;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Write transit networks in the Graphviz dot format.
pub mod dot;

/// The serialisable form of a transit network.
///
/// In JSON, this is `{"nodes": ["A", "B"], "edges": [["A", "B", 5]]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDescription<WeightType> {
    /// The stop names.
    pub nodes: Vec<String>,
    /// The routes as `(from, to, weight)`.
    pub edges: Vec<(String, String, WeightType)>,
}

/// Read a transit network from a JSON network description.
/// The network is validated as in [`TransitNetwork::new`].
pub fn read_network_from_json<
    WeightType: 'static + DijkstraWeight + Copy + Eq + Debug + Display + DeserializeOwned,
    Reader: Read,
>(
    reader: Reader,
) -> Result<TransitNetwork<WeightType>> {
    let description: NetworkDescription<WeightType> = serde_json::from_reader(reader)?;
    debug!(
        "Read network description with {} nodes and {} edges",
        description.nodes.len(),
        description.edges.len()
    );
    TransitNetwork::from_description(description)
}

/// Read a transit network from a JSON file.
pub fn read_network_from_json_file<
    WeightType: 'static + DijkstraWeight + Copy + Eq + Debug + Display + DeserializeOwned,
    P: AsRef<Path>,
>(
    path: P,
) -> Result<TransitNetwork<WeightType>> {
    read_network_from_json(BufReader::new(File::open(path)?))
}

/// Write a transit network as pretty-printed JSON network description.
pub fn write_network_to_json<
    WeightType: 'static + DijkstraWeight + Copy + Eq + Debug + Display + Serialize,
    Writer: Write,
>(
    network: &TransitNetwork<WeightType>,
    writer: Writer,
) -> Result<()> {
    serde_json::to_writer_pretty(writer, &network.to_description())?;
    Ok(())
}

/// Write a transit network to a JSON file.
pub fn write_network_to_json_file<
    WeightType: 'static + DijkstraWeight + Copy + Eq + Debug + Display + Serialize,
    P: AsRef<Path>,
>(
    network: &TransitNetwork<WeightType>,
    path: P,
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_network_to_json(network, &mut writer)?;
    writer.flush()?;
    Ok(())
}
