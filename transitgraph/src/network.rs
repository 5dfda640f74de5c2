use crate::algo::all_pairs::{all_pairs_shortest_paths, AllPairsShortestPaths};
use crate::algo::components;
use crate::algo::dijkstra::{DefaultDijkstra, DijkstraWeight};
use crate::algo::path_search;
use crate::error::{ErrorKind, Result};
use crate::index::NodeIndex;
use crate::interface::{ImmutableGraphContainer, MutableGraphContainer, NavigableGraph};
use crate::io::NetworkDescription;
use petgraph::graph::UnGraph;
use std::collections::HashMap;
use std::fmt::{Debug, Display};

/// The graph type backing a transit network.
/// Nodes carry the stop names and edges carry the travel time.
pub type TransitGraph<WeightType> = UnGraph<String, WeightType, usize>;

/// The index type of the stops in a transit network.
pub type StopIndex = NodeIndex<usize>;

/// A path between two stops given by stop names, together with its total weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<'a, WeightType> {
    /// The stops of the route, from start to end.
    /// Empty if the end is not reachable.
    pub stops: Vec<&'a str>,
    /// The total weight of the route, or `None` if the end is not reachable.
    pub distance: Option<WeightType>,
}

/// An undirected, weighted transit network with uniquely named stops.
///
/// The network is validated on construction and cannot be modified afterwards.
/// Stops are indexed in insertion order, and all queries by name fail with [`ErrorKind::UnknownNode`] for names that are not part of the network.
#[derive(Clone)]
pub struct TransitNetwork<WeightType> {
    graph: TransitGraph<WeightType>,
    stop_ids: HashMap<String, StopIndex>,
}

impl<WeightType: 'static + DijkstraWeight + Copy + Eq + Debug + Display>
    TransitNetwork<WeightType>
{
    /// Creates a new transit network from the given stop names and routes `(from, to, weight)`.
    ///
    /// Construction is atomic, it fails on the first route or stop that violates one of the following:
    ///  - stop names are unique ([`ErrorKind::DuplicateNode`]),
    ///  - routes connect known stops ([`ErrorKind::InvalidEdge`]),
    ///  - routes connect two different stops ([`ErrorKind::SelfLoop`]),
    ///  - route weights are non-negative ([`ErrorKind::NegativeWeight`]),
    ///  - each pair of stops is connected at most once ([`ErrorKind::DuplicateEdge`]),
    ///  - the sum of all route weights is below `WeightType::infinity()` ([`ErrorKind::WeightOverflow`]).
    ///
    /// The last condition bounds the length of every simple path, so distances never overflow.
    pub fn new<
        NodeName: Into<String>,
        EdgeName: AsRef<str>,
        Nodes: IntoIterator<Item = NodeName>,
        Edges: IntoIterator<Item = (EdgeName, EdgeName, WeightType)>,
    >(
        nodes: Nodes,
        edges: Edges,
    ) -> Result<Self> {
        let mut graph = TransitGraph::default();
        let mut stop_ids = HashMap::new();
        let mut total_weight = WeightType::zero();

        for name in nodes {
            let name = name.into();
            if stop_ids.contains_key(&name) {
                bail!(ErrorKind::DuplicateNode(name));
            }
            let stop_id = MutableGraphContainer::add_node(&mut graph, name.clone());
            stop_ids.insert(name, stop_id);
        }

        for (from, to, weight) in edges {
            let (from, to) = (from.as_ref(), to.as_ref());
            let (from_id, to_id) = match (stop_ids.get(from), stop_ids.get(to)) {
                (Some(&from_id), Some(&to_id)) => (from_id, to_id),
                _ => bail!(ErrorKind::InvalidEdge(from.to_owned(), to.to_owned())),
            };
            if from_id == to_id {
                bail!(ErrorKind::SelfLoop(from.to_owned()));
            }
            if weight < WeightType::zero() {
                bail!(ErrorKind::NegativeWeight(
                    from.to_owned(),
                    to.to_owned(),
                    weight.to_string()
                ));
            }
            if graph.contains_edge_between(from_id, to_id) {
                bail!(ErrorKind::DuplicateEdge(from.to_owned(), to.to_owned()));
            }
            total_weight = match total_weight.checked_add(weight) {
                Some(total_weight) if total_weight < WeightType::infinity() => total_weight,
                _ => bail!(ErrorKind::WeightOverflow(
                    from.to_owned(),
                    to.to_owned(),
                    weight.to_string()
                )),
            };
            MutableGraphContainer::add_edge(&mut graph, from_id, to_id, weight);
        }

        debug!(
            "Built transit network with {} stops and {} routes",
            ImmutableGraphContainer::node_count(&graph),
            ImmutableGraphContainer::edge_count(&graph)
        );
        Ok(Self { graph, stop_ids })
    }

    /// Creates a transit network from its serialisable description.
    pub fn from_description(description: NetworkDescription<WeightType>) -> Result<Self> {
        Self::new(description.nodes, description.edges)
    }

    /// Returns the serialisable description of this network.
    /// Stops and routes are listed in insertion order.
    pub fn to_description(&self) -> NetworkDescription<WeightType> {
        NetworkDescription {
            nodes: self.nodes().map(ToOwned::to_owned).collect(),
            edges: self
                .edges()
                .map(|(from, to, weight)| (from.to_owned(), to.to_owned(), weight))
                .collect(),
        }
    }

    /// Returns the underlying graph, for use with the generic algorithms of this crate.
    pub fn graph(&self) -> &TransitGraph<WeightType> {
        &self.graph
    }

    /// Returns the index of the stop with the given name.
    pub fn node_index(&self, name: &str) -> Result<StopIndex> {
        self.stop_ids
            .get(name)
            .copied()
            .ok_or_else(|| ErrorKind::UnknownNode(name.to_owned()).into())
    }

    /// Returns the name of the stop with the given index.
    /// Panics if the index is not part of this network.
    pub fn node_name(&self, stop_id: StopIndex) -> &str {
        self.graph.node_data(stop_id)
    }

    /// Returns true if this network has a stop with the given name.
    pub fn contains_node(&self, name: &str) -> bool {
        self.stop_ids.contains_key(name)
    }

    /// Returns the stop names in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        ImmutableGraphContainer::node_indices(&self.graph).map(move |stop_id| self.node_name(stop_id))
    }

    /// Returns the routes as `(from, to, weight)` in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, WeightType)> + '_ {
        ImmutableGraphContainer::edge_indices(&self.graph).map(move |edge_id| {
            let endpoints = ImmutableGraphContainer::edge_endpoints(&self.graph, edge_id);
            (
                self.node_name(endpoints.from_node),
                self.node_name(endpoints.to_node),
                *self.graph.edge_data(edge_id),
            )
        })
    }

    /// Returns the amount of stops.
    pub fn node_count(&self) -> usize {
        ImmutableGraphContainer::node_count(&self.graph)
    }

    /// Returns the amount of routes.
    pub fn edge_count(&self) -> usize {
        ImmutableGraphContainer::edge_count(&self.graph)
    }

    /// Returns the names of the stops adjacent to the given stop, in lexicographic order.
    pub fn neighbors(&self, name: &str) -> Result<Vec<&str>> {
        let stop_id = self.node_index(name)?;
        Ok(self
            .graph
            .sorted_neighbors(stop_id)
            .into_iter()
            .map(|neighbor| self.node_name(neighbor.node_id))
            .collect())
    }

    /// Returns the amount of routes incident to the given stop.
    pub fn degree(&self, name: &str) -> Result<usize> {
        let stop_id = self.node_index(name)?;
        Ok(NavigableGraph::degree(&self.graph, stop_id))
    }

    /// Returns the average amount of routes per stop, or zero for an empty network.
    pub fn average_degree(&self) -> f64 {
        if self.node_count() == 0 {
            0.0
        } else {
            2.0 * self.edge_count() as f64 / self.node_count() as f64
        }
    }

    /// Returns the sum of the weights of all routes.
    pub fn total_weight(&self) -> WeightType {
        self.edges()
            .fold(WeightType::zero(), |sum, (_, _, weight)| sum + weight)
    }

    /// Returns true if every stop can be reached from every other stop.
    /// An empty network is connected.
    pub fn is_connected(&self) -> bool {
        components::is_connected(&self.graph)
    }

    /// Returns the stop names of each connected component.
    pub fn connected_components(&self) -> Vec<Vec<&str>> {
        components::connected_components(&self.graph)
            .into_iter()
            .map(|component| self.walk_names(component))
            .collect()
    }

    /// Returns the path found by a depth-first search from `start` to `end`.
    /// The path is not necessarily the one with the fewest stops.
    ///
    /// See [`path_search::dfs_path`] for the order in which routes are explored.
    pub fn dfs_path(&self, start: &str, end: &str) -> Result<Vec<&str>> {
        let (start, end) = (self.node_index(start)?, self.node_index(end)?);
        Ok(self.walk_names(path_search::dfs_path(&self.graph, start, end)))
    }

    /// Returns a path with the fewest routes from `start` to `end`, found by a breadth-first search.
    pub fn bfs_path(&self, start: &str, end: &str) -> Result<Vec<&str>> {
        let (start, end) = (self.node_index(start)?, self.node_index(end)?);
        Ok(self.walk_names(path_search::bfs_path(&self.graph, start, end)))
    }

    /// Returns a path of minimum total weight from `start` to `end`.
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<Route<WeightType>> {
        let (start, end) = (self.node_index(start)?, self.node_index(end)?);
        let mut dijkstra = DefaultDijkstra::<_, WeightType>::new(&self.graph);
        let shortest_path = dijkstra.shortest_path(&self.graph, start, end);
        let distance = Some(shortest_path.distance).filter(|_| shortest_path.is_reachable());
        Ok(Route {
            stops: self.walk_names(shortest_path.path),
            distance,
        })
    }

    /// Returns the paths of minimum total weight between all ordered pairs of distinct stops, by stop index.
    pub fn all_pairs_shortest_paths(&self) -> AllPairsShortestPaths<StopIndex, WeightType> {
        all_pairs_shortest_paths(&self.graph)
    }

    /// Returns the paths of minimum total weight between all ordered pairs of distinct stops, by stop name.
    /// The outer map is keyed by the start, the inner maps by the end.
    pub fn all_pairs_routes(&self) -> HashMap<&str, HashMap<&str, Route<WeightType>>> {
        let mut result: HashMap<_, HashMap<_, _>> =
            self.nodes().map(|stop| (stop, HashMap::new())).collect();
        for (start, end, shortest_path) in self.all_pairs_shortest_paths().iter() {
            let route = Route {
                stops: self.walk_names(shortest_path.path.clone()),
                distance: Some(shortest_path.distance).filter(|_| shortest_path.is_reachable()),
            };
            result
                .entry(self.node_name(start))
                .or_default()
                .insert(self.node_name(end), route);
        }
        result
    }

    fn walk_names<Walk: Into<Vec<StopIndex>>>(&self, walk: Walk) -> Vec<&str> {
        walk.into()
            .into_iter()
            .map(|stop_id| self.node_name(stop_id))
            .collect()
    }
}

impl<WeightType: Debug> Debug for TransitNetwork<WeightType> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TransitNetwork[{} stops, {} routes]",
            ImmutableGraphContainer::node_count(&self.graph),
            ImmutableGraphContainer::edge_count(&self.graph)
        )
    }
}
