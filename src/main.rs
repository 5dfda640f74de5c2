#![recursion_limit = "1024"]

use clap::Parser;
use error_chain::{error_chain, ChainedError, ExitCode};
use log::{error, info};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;

mod analyse;
mod demo;
mod export;
mod path;
mod shortest_paths;
mod util;

error_chain! {
    foreign_links {
        Io(std::io::Error);
        Logger(log::SetLoggerError);
    }

    links {
        TransitGraph(transitgraph::Error, transitgraph::ErrorKind);
    }

    errors {
        Parameter {
            description("a parameter was missing, superfluous or had an illegal value, see the log for more details")
            display("a parameter was missing, superfluous or had an illegal value, see the log for more details")
        }
    }
}

#[derive(Parser)]
#[clap(name = "Transit Routes", version = env!("CARGO_PKG_VERSION"))]
pub struct CliOptions {
    #[clap(subcommand)]
    pub subcommand: Command,

    #[clap(
        long,
        default_value = "Info",
        help = "The log level to use, one of Error, Warn, Info, Debug, Trace"
    )]
    pub log_level: LevelFilter,

    #[clap(
        long,
        help = "A transit network in JSON format, as written by the export command. If not given, the built-in city transport network is used."
    )]
    pub input: Option<PathBuf>,
}

#[derive(Parser)]
pub enum Command {
    #[clap(
        about = "Prints statistics about the network, i.e. stop and route counts, the degree of each stop and connectivity."
    )]
    Analyse(analyse::AnalyseCommand),
    #[clap(about = "Finds a path between two stops with depth- and/or breadth-first search.")]
    Path(path::PathCommand),
    #[clap(about = "Finds the paths with minimum travel time between pairs of stops.")]
    ShortestPaths(shortest_paths::ShortestPathsCommand),
    /// Writes the network as Graphviz dot file for visualisation and/or as JSON.
    Export(export::ExportCommand),
    /// Runs the complete analysis of the built-in example: statistics, DFS and BFS paths and shortest paths.
    Demo(demo::DemoCommand),
}

// The main is unpacked from an error-chain macro.
// The real main is run(), below this method.
fn main() {
    ::std::process::exit(match run() {
        Ok(()) => ExitCode::code(()),
        Err(ref e) => {
            error!("{}", ChainedError::display_chain(e));
            1
        }
    });
}

fn initialise_logging(level_filter: LevelFilter) -> Result<()> {
    CombinedLogger::init(vec![TermLogger::new(
        level_filter,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])?;

    info!("Logging initialised successfully");
    Ok(())
}

fn run() -> Result<()> {
    let options = &CliOptions::parse();
    initialise_logging(options.log_level)?;

    info!("Hello");

    match &options.subcommand {
        Command::Analyse(subcommand) => analyse::analyse(options, subcommand),
        Command::Path(subcommand) => path::find_path(options, subcommand),
        Command::ShortestPaths(subcommand) => {
            shortest_paths::compute_shortest_paths(options, subcommand)
        }
        Command::Export(subcommand) => export::export(options, subcommand),
        Command::Demo(subcommand) => demo::demo(options, subcommand),
    }?;

    info!("Goodbye");
    Ok(())
}
