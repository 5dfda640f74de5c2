use crate::{CliOptions, ErrorKind};
use clap::Parser;
use error_chain::bail;
use log::{error, info};
use std::path::PathBuf;
use transitgraph::io::dot::write_network_to_dot_file;
use transitgraph::io::write_network_to_json_file;

#[derive(Parser)]
pub struct ExportCommand {
    #[clap(
        long,
        help = "Write the network as Graphviz dot file, e.g. for rendering with `neato -Tpng`"
    )]
    pub dot: Option<PathBuf>,

    #[clap(
        long,
        help = "Write the network as JSON file that can be read back with --input"
    )]
    pub json: Option<PathBuf>,
}

pub(crate) fn export(options: &CliOptions, subcommand: &ExportCommand) -> crate::Result<()> {
    if subcommand.dot.is_none() && subcommand.json.is_none() {
        error!("No output file given, use --dot and/or --json");
        bail!(ErrorKind::Parameter);
    }

    let network = crate::util::load_network(options)?;

    if let Some(dot) = &subcommand.dot {
        info!("Writing dot file to '{}'", dot.display());
        write_network_to_dot_file(&network, dot)?;
    }
    if let Some(json) = &subcommand.json {
        info!("Writing JSON file to '{}'", json.display());
        write_network_to_json_file(&network, json)?;
    }

    Ok(())
}
