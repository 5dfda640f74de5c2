use crate::algo::dijkstra::DijkstraWeight;
use crate::error::Result;
use crate::network::TransitNetwork;
use std::fmt::{Debug, Display};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a transit network as undirected Graphviz graph.
/// Stops become nodes labelled with their name, and routes become edges labelled with their weight.
/// No layout is computed, render the output with e.g. `neato -Tpng`.
pub fn write_network_to_dot<
    WeightType: 'static + DijkstraWeight + Copy + Eq + Debug + Display,
    Writer: Write,
>(
    network: &TransitNetwork<WeightType>,
    writer: &mut Writer,
) -> Result<()> {
    writeln!(writer, "graph transit {{")?;
    writeln!(writer, "    node [shape=ellipse, style=filled, fillcolor=lightblue];")?;
    for name in network.nodes() {
        writeln!(writer, "    \"{}\";", escape_dot(name))?;
    }
    for (from, to, weight) in network.edges() {
        writeln!(
            writer,
            "    \"{}\" -- \"{}\" [label=\"{}\"];",
            escape_dot(from),
            escape_dot(to),
            weight
        )?;
    }
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write a transit network to a Graphviz dot file.
pub fn write_network_to_dot_file<
    WeightType: 'static + DijkstraWeight + Copy + Eq + Debug + Display,
    P: AsRef<Path>,
>(
    network: &TransitNetwork<WeightType>,
    path: P,
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_network_to_dot(network, &mut writer)?;
    writer.flush()?;
    Ok(())
}

fn escape_dot(name: &str) -> String {
    name.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
