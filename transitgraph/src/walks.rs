use crate::algo::dijkstra::{DijkstraWeight, DijkstraWeightedEdgeData};
use crate::interface::ImmutableGraphContainer;

/// A sequence of nodes in a graph, where each consecutive pair of nodes is connected by an edge.
///
/// An empty walk is used to report that no path exists, and a walk with a single node is the path from a node to itself.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NodeWalk<NodeIndex> {
    walk: Vec<NodeIndex>,
}

impl<NodeIndex: Copy> NodeWalk<NodeIndex> {
    /// Creates a new walk over the given node indices.
    pub fn new(walk: Vec<NodeIndex>) -> Self {
        Self { walk }
    }

    /// Returns an iterator over the nodes of this walk.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, NodeIndex>> {
        self.walk.iter().copied()
    }

    /// Returns the length of this walk as its amount of nodes.
    pub fn len(&self) -> usize {
        self.walk.len()
    }

    /// Returns true if this walk contains no nodes.
    pub fn is_empty(&self) -> bool {
        self.walk.is_empty()
    }

    /// Returns the amount of edges traversed by this walk.
    pub fn edge_count(&self) -> usize {
        self.walk.len().saturating_sub(1)
    }

    /// Returns the first node of this walk or `None`, if this walk is empty.
    pub fn first(&self) -> Option<NodeIndex> {
        self.walk.first().copied()
    }

    /// Returns the last node of this walk or `None` if this walk is empty.
    pub fn last(&self) -> Option<NodeIndex> {
        self.walk.last().copied()
    }

    /// Returns the nodes of this walk as slice.
    pub fn as_slice(&self) -> &[NodeIndex] {
        &self.walk
    }

    /// Returns true if each consecutive pair of nodes in this walk is connected by an edge in the given graph.
    /// Empty and single-node walks are always valid.
    pub fn is_valid_in<Graph: ImmutableGraphContainer<NodeIndex = NodeIndex>>(
        &self,
        graph: &Graph,
    ) -> bool {
        self.walk
            .iter()
            .all(|&node| graph.contains_node_index(node))
            && self
                .walk
                .windows(2)
                .all(|pair| graph.contains_edge_between(pair[0], pair[1]))
    }

    /// Returns the sum of the edge weights along this walk, or `None` if this walk is not valid in the given graph.
    /// The weight of a walk with less than two nodes is zero.
    pub fn weight_in<
        WeightType: DijkstraWeight,
        Graph: ImmutableGraphContainer<NodeIndex = NodeIndex>,
    >(
        &self,
        graph: &Graph,
    ) -> Option<WeightType>
    where
        Graph::EdgeData: DijkstraWeightedEdgeData<WeightType>,
    {
        let mut weight = WeightType::zero();
        for pair in self.walk.windows(2) {
            let edge = graph.edge_between(pair[0], pair[1])?;
            weight = weight + graph.edge_data(edge).weight();
        }
        Some(weight)
    }
}

impl<NodeIndex> Default for NodeWalk<NodeIndex> {
    fn default() -> Self {
        Self { walk: Vec::new() }
    }
}

impl<NodeIndex> From<Vec<NodeIndex>> for NodeWalk<NodeIndex> {
    fn from(walk: Vec<NodeIndex>) -> Self {
        Self { walk }
    }
}

impl<NodeIndex> From<NodeWalk<NodeIndex>> for Vec<NodeIndex> {
    fn from(walk: NodeWalk<NodeIndex>) -> Self {
        walk.walk
    }
}

impl<NodeIndex> FromIterator<NodeIndex> for NodeWalk<NodeIndex> {
    fn from_iter<T: IntoIterator<Item = NodeIndex>>(iter: T) -> Self {
        Self {
            walk: iter.into_iter().collect(),
        }
    }
}

impl<NodeIndex> std::ops::Index<usize> for NodeWalk<NodeIndex> {
    type Output = NodeIndex;

    fn index(&self, index: usize) -> &Self::Output {
        &self.walk[index]
    }
}

impl<NodeIndex: std::fmt::Debug> std::fmt::Debug for NodeWalk<NodeIndex> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "NodeWalk[")?;
        if let Some(first) = self.walk.first() {
            write!(f, "{:?}", first)?;
        }
        for node in self.walk.iter().skip(1) {
            write!(f, ", {:?}", node)?;
        }
        write!(f, "]")
    }
}
