//! A crate to model city transit networks as undirected weighted graphs and to find routes in them.
//!
//! The graph algorithms are written against the traits in [`interface`], and implemented for `petgraph` in [`implementation`].
//! [`network::TransitNetwork`] wraps such a graph with named stops, validates it on construction and answers queries by stop name.
#![warn(missing_docs)]
#![recursion_limit = "1024"]
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

/// Graph algorithms on the graph traits.
pub mod algo;
/// Contains the error types used by this crate.
pub mod error;
/// Graph implementations.
pub mod implementation;
/// Strongly typed node and edge indices.
pub mod index;
/// The graph traits.
pub mod interface;
/// Reading and writing transit networks.
pub mod io;
/// The validated transit network with named stops.
pub mod network;
/// Paths as sequences of nodes.
pub mod walks;

pub use error::*;
pub use network::{Route, TransitNetwork};
