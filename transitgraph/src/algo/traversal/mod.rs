use crate::index::{GraphIndex, OptionalGraphIndex};
use crate::interface::{GraphBase, NavigableGraph, Neighbor, StaticGraph};
use crate::walks::NodeWalk;
use std::collections::VecDeque;
use std::marker::PhantomData;

/// A BFS that expands neighbors in storage order.
pub type PreOrderBfs<'a, Graph> = PreOrderTraversal<'a, Graph, StorageOrderNeighborStrategy>;
/// A BFS that expands neighbors in the order of their node data.
pub type PreOrderSortedBfs<'a, Graph> = PreOrderTraversal<'a, Graph, SortedNeighborStrategy>;

/// A breadth-first traversal that yields nodes in the order they are discovered.
///
/// Every discovered node gets a rank, its position in discovery order, and remembers the node it was discovered from.
/// These parents form a BFS tree rooted at the start node,
/// so `path_to` returns a path with the fewest edges to any discovered node.
pub struct PreOrderTraversal<'a, Graph: GraphBase, NeighborStrategy> {
    graph: &'a Graph,
    queue: VecDeque<Graph::NodeIndex>,
    rank: Vec<Option<usize>>,
    parent: Vec<Graph::OptionalNodeIndex>,
    discovered: usize,
    neighbor_strategy: PhantomData<NeighborStrategy>,
}

impl<'a, Graph: StaticGraph, NeighborStrategy: TraversalNeighborStrategy<'a, Graph>>
    PreOrderTraversal<'a, Graph, NeighborStrategy>
{
    /// A traversal of `graph` starting at `start`.
    pub fn new(graph: &'a Graph, start: Graph::NodeIndex) -> Self {
        let mut result = Self::new_without_start(graph);
        result.continue_traversal_from(start);
        result
    }

    /// A traversal of `graph` with nothing discovered yet.
    /// Call `continue_traversal_from` to give it a start node.
    pub fn new_without_start(graph: &'a Graph) -> Self {
        Self {
            graph,
            queue: VecDeque::new(),
            rank: vec![None; graph.node_count()],
            parent: vec![Graph::OptionalNodeIndex::new_none(); graph.node_count()],
            discovered: 0,
            neighbor_strategy: PhantomData,
        }
    }

    /// Forgets all discovered nodes and restarts at `start`.
    pub fn reset(&mut self, start: Graph::NodeIndex) {
        self.queue.clear();
        self.rank.iter_mut().for_each(|rank| *rank = None);
        self.parent
            .iter_mut()
            .for_each(|parent| *parent = Graph::OptionalNodeIndex::new_none());
        self.discovered = 0;
        self.continue_traversal_from(start);
    }

    /// Starts a new BFS tree at the undiscovered node `start`, keeping the nodes discovered so far.
    /// The traversal must be exhausted before. Returns the rank of `start`.
    pub fn continue_traversal_from(&mut self, start: Graph::NodeIndex) -> usize {
        debug_assert!(self.queue.is_empty());
        debug_assert!(self.rank[start.as_usize()].is_none());
        self.discover(start);
        self.discovered - 1
    }

    fn discover(&mut self, node: Graph::NodeIndex) {
        self.rank[node.as_usize()] = Some(self.discovered);
        self.discovered += 1;
        self.queue.push_back(node);
    }

    /// The discovery rank of `node`, or `None` if it was not discovered yet.
    pub fn rank_of(&self, node: Graph::NodeIndex) -> Option<usize> {
        self.rank[node.as_usize()]
    }

    /// The node `node` was discovered from.
    /// `None` for start nodes and undiscovered nodes.
    pub fn parent_of(&self, node: Graph::NodeIndex) -> Option<Graph::NodeIndex> {
        self.parent[node.as_usize()].into()
    }

    /// The path in the BFS tree from the start node to `node`.
    /// Empty if `node` was not discovered.
    pub fn path_to(&self, node: Graph::NodeIndex) -> NodeWalk<Graph::NodeIndex> {
        if self.rank_of(node).is_none() {
            return NodeWalk::default();
        }

        let mut walk: Vec<_> =
            std::iter::successors(Some(node), |&current| self.parent_of(current)).collect();
        walk.reverse();
        walk.into()
    }
}

impl<'a, Graph: StaticGraph, NeighborStrategy: TraversalNeighborStrategy<'a, Graph>> Iterator
    for PreOrderTraversal<'a, Graph, NeighborStrategy>
{
    type Item = Graph::NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;

        for neighbor in NeighborStrategy::neighbor_iterator(self.graph, node) {
            if self.rank_of(neighbor.node_id).is_none() {
                self.parent[neighbor.node_id.as_usize()] = node.into();
                self.discover(neighbor.node_id);
            }
        }

        Some(node)
    }
}

/// The order in which a traversal expands the neighbors of a node.
pub trait TraversalNeighborStrategy<'a, Graph: GraphBase> {
    /// Yields the neighbors in expansion order.
    type Iterator: Iterator<Item = Neighbor<Graph::NodeIndex, Graph::EdgeIndex>>;

    /// The neighbors of `node` in expansion order.
    fn neighbor_iterator(graph: &'a Graph, node: Graph::NodeIndex) -> Self::Iterator;
}

/// Expands neighbors in the order the graph stores them.
pub struct StorageOrderNeighborStrategy;

impl<'a, Graph: NavigableGraph<'a>> TraversalNeighborStrategy<'a, Graph>
    for StorageOrderNeighborStrategy
{
    type Iterator = Graph::Neighbors;

    fn neighbor_iterator(graph: &'a Graph, node: Graph::NodeIndex) -> Self::Iterator {
        graph.neighbors(node)
    }
}

/// Expands neighbors ordered by their node data, ties broken by node index.
/// For stop names this is lexicographic order.
pub struct SortedNeighborStrategy;

impl<'a, Graph: NavigableGraph<'a>> TraversalNeighborStrategy<'a, Graph> for SortedNeighborStrategy
where
    Graph::NodeData: Ord,
{
    type Iterator = std::vec::IntoIter<Neighbor<Graph::NodeIndex, Graph::EdgeIndex>>;

    fn neighbor_iterator(graph: &'a Graph, node: Graph::NodeIndex) -> Self::Iterator {
        graph.sorted_neighbors(node).into_iter()
    }
}
