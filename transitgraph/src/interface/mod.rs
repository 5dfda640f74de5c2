//! Traits that abstract over undirected graphs.
//!
//! Read access lives in `ImmutableGraphContainer`, construction in `MutableGraphContainer`,
//! and neighbor iteration in `NavigableGraph`, whose iterators borrow the graph.
//! An edge `{a, b}` makes `b` a neighbor of `a` and `a` a neighbor of `b`.

use crate::index::{GraphIndex, GraphIndices, OptionalGraphIndex};

/// The index and data types of a graph.
pub trait GraphBase {
    /// Stored at each node, e.g. the name of a stop.
    type NodeData;
    /// Stored at each edge, e.g. the travel time of a route.
    type EdgeData;
    /// A node index or none.
    type OptionalNodeIndex: OptionalGraphIndex<Self::NodeIndex>;
    /// An edge index or none.
    type OptionalEdgeIndex: OptionalGraphIndex<Self::EdgeIndex>;
    /// Identifies a node.
    type NodeIndex: GraphIndex<Self::OptionalNodeIndex>;
    /// Identifies an edge.
    type EdgeIndex: GraphIndex<Self::OptionalEdgeIndex>;
}

/// Read access to the nodes and edges of a graph.
///
/// Node indices are `0..node_count()` and edge indices are `0..edge_count()`.
pub trait ImmutableGraphContainer: GraphBase {
    /// All node indices in ascending order.
    fn node_indices(&self) -> GraphIndices<Self::NodeIndex>;

    /// All edge indices in ascending order.
    fn edge_indices(&self) -> GraphIndices<Self::EdgeIndex>;

    /// Returns true if `node_id` refers to a node of this graph.
    fn contains_node_index(&self, node_id: Self::NodeIndex) -> bool;

    /// The number of nodes.
    fn node_count(&self) -> usize;

    /// The number of edges.
    fn edge_count(&self) -> usize;

    /// The data stored at `node_id`.
    /// Panics if the node does not exist.
    fn node_data(&self, node_id: Self::NodeIndex) -> &Self::NodeData;

    /// The data stored at `edge_id`.
    /// Panics if the edge does not exist.
    fn edge_data(&self, edge_id: Self::EdgeIndex) -> &Self::EdgeData;

    /// Some edge connecting `a` and `b`, if any.
    fn edge_between(&self, a: Self::NodeIndex, b: Self::NodeIndex) -> Option<Self::EdgeIndex>;

    /// Returns true if `a` and `b` are adjacent.
    fn contains_edge_between(&self, a: Self::NodeIndex, b: Self::NodeIndex) -> bool {
        self.edge_between(a, b).is_some()
    }

    /// The endpoints of `edge_id` in insertion order.
    fn edge_endpoints(&self, edge_id: Self::EdgeIndex) -> Edge<Self::NodeIndex>;

    /// Returns true if the graph has no nodes.
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}

/// Construction of a graph.
pub trait MutableGraphContainer: ImmutableGraphContainer {
    /// Inserts a node and returns its index, which equals the previous node count.
    fn add_node(&mut self, node_data: Self::NodeData) -> Self::NodeIndex;

    /// Inserts an undirected edge between `a` and `b`.
    fn add_edge(
        &mut self,
        a: Self::NodeIndex,
        b: Self::NodeIndex,
        edge_data: Self::EdgeData,
    ) -> Self::EdgeIndex;

    /// Removes everything.
    fn clear(&mut self);
}

/// Iteration over the neighbors of a node.
pub trait NavigableGraph<'a>: ImmutableGraphContainer + Sized {
    /// Yields the neighbors of one node.
    type Neighbors: Iterator<Item = Neighbor<Self::NodeIndex, Self::EdgeIndex>>;

    /// The neighbors of `node_id` in storage order.
    fn neighbors(&'a self, node_id: Self::NodeIndex) -> Self::Neighbors;

    /// The number of edges incident to `node_id`.
    fn degree(&'a self, node_id: Self::NodeIndex) -> usize {
        self.neighbors(node_id).count()
    }

    /// The neighbors of `node_id` sorted by their node data, then by node index.
    /// Path searches expand neighbors in this order, so their results do not depend on the order in which edges were added.
    fn sorted_neighbors(
        &'a self,
        node_id: Self::NodeIndex,
    ) -> Vec<Neighbor<Self::NodeIndex, Self::EdgeIndex>>
    where
        Self::NodeData: Ord,
    {
        let mut neighbors: Vec<_> = self.neighbors(node_id).collect();
        neighbors.sort_by(|n1, n2| {
            self.node_data(n1.node_id)
                .cmp(self.node_data(n2.node_id))
                .then(n1.node_id.cmp(&n2.node_id))
        });
        neighbors
    }
}

/// Shorthand bound for graphs that are only read.
pub trait StaticGraph: ImmutableGraphContainer + for<'a> NavigableGraph<'a> {}
impl<T: ImmutableGraphContainer + for<'a> NavigableGraph<'a>> StaticGraph for T {}

/// Shorthand bound for graphs that are built and read.
pub trait DynamicGraph: StaticGraph + MutableGraphContainer {}
impl<T: StaticGraph + MutableGraphContainer> DynamicGraph for T {}

/// The two endpoints of an edge.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Edge<NodeIndex> {
    /// The endpoint given first on insertion.
    pub from_node: NodeIndex,
    /// The endpoint given second on insertion.
    pub to_node: NodeIndex,
}

/// A node adjacent to some other node, together with the edge between them.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Neighbor<NodeIndex, EdgeIndex> {
    /// The connecting edge.
    pub edge_id: EdgeIndex,
    /// The adjacent node.
    pub node_id: NodeIndex,
}
