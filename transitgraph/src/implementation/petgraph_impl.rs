use crate::index::{GraphIndex, GraphIndices};
use crate::interface::{
    DynamicGraph, Edge, GraphBase, ImmutableGraphContainer, MutableGraphContainer,
    NavigableGraph, Neighbor,
};
use num_traits::{PrimInt, ToPrimitive};
use petgraph::graph::{Edges, UnGraph};
use petgraph::visit::EdgeRef;
use petgraph::Undirected;

pub use petgraph;

/// Creates a new empty undirected graph backed by `petgraph`.
/// The returned type only exposes the graph traits of this crate, hiding the inherent methods of `petgraph`.
pub fn new<NodeData: 'static + Clone, EdgeData: 'static + Clone>(
) -> impl DynamicGraph<NodeData = NodeData, EdgeData = EdgeData> + Default + Clone {
    UnGraph::<NodeData, EdgeData, usize>::default()
}

impl<NodeData, EdgeData> GraphBase for UnGraph<NodeData, EdgeData, usize> {
    type NodeData = NodeData;
    type EdgeData = EdgeData;
    type OptionalNodeIndex = crate::index::OptionalNodeIndex<usize>;
    type OptionalEdgeIndex = crate::index::OptionalEdgeIndex<usize>;
    type NodeIndex = crate::index::NodeIndex<usize>;
    type EdgeIndex = crate::index::EdgeIndex<usize>;
}

impl<NodeData, EdgeData> ImmutableGraphContainer for UnGraph<NodeData, EdgeData, usize> {
    fn node_indices(&self) -> GraphIndices<Self::NodeIndex> {
        GraphIndices::from(0..self.node_count())
    }

    fn edge_indices(&self) -> GraphIndices<Self::EdgeIndex> {
        GraphIndices::from(0..self.edge_count())
    }

    fn contains_node_index(&self, node_id: Self::NodeIndex) -> bool {
        self.node_weight(node_id.into()).is_some()
    }

    fn node_count(&self) -> usize {
        self.node_count()
    }

    fn edge_count(&self) -> usize {
        self.edge_count()
    }

    fn node_data(&self, node_id: Self::NodeIndex) -> &Self::NodeData {
        &self[petgraph::graph::NodeIndex::<usize>::from(node_id)]
    }

    fn edge_data(&self, edge_id: Self::EdgeIndex) -> &Self::EdgeData {
        &self[petgraph::graph::EdgeIndex::<usize>::from(edge_id)]
    }

    fn edge_between(&self, a: Self::NodeIndex, b: Self::NodeIndex) -> Option<Self::EdgeIndex> {
        self.find_edge(a.into(), b.into())
            .map(|edge| edge.index().into())
    }

    fn edge_endpoints(&self, edge_id: Self::EdgeIndex) -> Edge<Self::NodeIndex> {
        let edge = petgraph::graph::EdgeIndex::<usize>::from(edge_id);
        Edge {
            from_node: self.raw_edges()[edge.index()].source().index().into(),
            to_node: self.raw_edges()[edge.index()].target().index().into(),
        }
    }
}

impl<NodeData, EdgeData> MutableGraphContainer for UnGraph<NodeData, EdgeData, usize> {
    fn add_node(&mut self, node_data: NodeData) -> Self::NodeIndex {
        self.add_node(node_data).index().into()
    }

    fn add_edge(
        &mut self,
        a: Self::NodeIndex,
        b: Self::NodeIndex,
        edge_data: EdgeData,
    ) -> Self::EdgeIndex {
        self.add_edge(a.into(), b.into(), edge_data).index().into()
    }

    fn clear(&mut self) {
        self.clear();
    }
}

/// The neighbors of a node in an undirected `petgraph` graph.
/// `petgraph` reports incident edges with either endpoint as source, so the neighbor is whichever endpoint is not the node itself.
pub struct PetgraphUndirectedNeighbors<'a, EdgeData> {
    edges: Edges<'a, EdgeData, Undirected, usize>,
    node_id: usize,
}

impl<'a, EdgeData> Iterator for PetgraphUndirectedNeighbors<'a, EdgeData> {
    type Item = Neighbor<crate::index::NodeIndex<usize>, crate::index::EdgeIndex<usize>>;

    fn next(&mut self) -> Option<Self::Item> {
        let node_id = self.node_id;
        self.edges.next().map(|edge| {
            let neighbor = if edge.source().index() == node_id {
                edge.target()
            } else {
                edge.source()
            };
            Neighbor {
                edge_id: edge.id().index().into(),
                node_id: neighbor.index().into(),
            }
        })
    }
}

impl<'a, NodeData, EdgeData: 'a> NavigableGraph<'a> for UnGraph<NodeData, EdgeData, usize> {
    type Neighbors = PetgraphUndirectedNeighbors<'a, EdgeData>;

    fn neighbors(&'a self, node_id: <Self as GraphBase>::NodeIndex) -> Self::Neighbors {
        debug_assert!(node_id.as_usize() < self.node_count());
        PetgraphUndirectedNeighbors {
            edges: self.edges(node_id.into()),
            node_id: node_id.as_usize(),
        }
    }
}

impl<IndexType: PrimInt + ToPrimitive + std::hash::Hash + petgraph::graph::IndexType>
    From<crate::index::NodeIndex<IndexType>> for petgraph::graph::NodeIndex<IndexType>
{
    fn from(index: crate::index::NodeIndex<IndexType>) -> Self {
        petgraph::graph::NodeIndex::new(index.as_usize())
    }
}

impl<IndexType: PrimInt + ToPrimitive + std::hash::Hash + petgraph::graph::IndexType>
    From<crate::index::EdgeIndex<IndexType>> for petgraph::graph::EdgeIndex<IndexType>
{
    fn from(index: crate::index::EdgeIndex<IndexType>) -> Self {
        petgraph::graph::EdgeIndex::new(index.as_usize())
    }
}

#[cfg(test)]
mod tests {
    use super::new;
    use crate::interface::{
        Edge, ImmutableGraphContainer, MutableGraphContainer, NavigableGraph,
    };

    #[test]
    fn test_neighbors_are_undirected() {
        let mut graph = new::<char, u32>();
        let n0 = graph.add_node('a');
        let n1 = graph.add_node('b');
        let n2 = graph.add_node('c');
        let e0 = graph.add_edge(n0, n1, 3);
        let e1 = graph.add_edge(n2, n0, 4);

        let mut neighbors: Vec<_> = graph.neighbors(n0).map(|n| (n.node_id, n.edge_id)).collect();
        neighbors.sort();
        assert_eq!(neighbors, vec![(n1, e0), (n2, e1)]);
        assert_eq!(graph.neighbors(n1).map(|n| n.node_id).collect::<Vec<_>>(), vec![n0]);
        assert_eq!(graph.neighbors(n2).map(|n| n.node_id).collect::<Vec<_>>(), vec![n0]);
        assert_eq!(graph.degree(n0), 2);
        assert_eq!(graph.degree(n1), 1);
    }

    #[test]
    fn test_edge_queries() {
        let mut graph = new::<char, u32>();
        let n0 = graph.add_node('a');
        let n1 = graph.add_node('b');
        let n2 = graph.add_node('c');
        let e0 = graph.add_edge(n0, n1, 3);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_between(n0, n1), Some(e0));
        assert_eq!(graph.edge_between(n1, n0), Some(e0));
        assert!(!graph.contains_edge_between(n0, n2));
        assert_eq!(graph.edge_data(e0), &3);
        assert_eq!(graph.node_data(n2), &'c');
        assert_eq!(
            graph.edge_endpoints(e0),
            Edge {
                from_node: n0,
                to_node: n1
            }
        );
        assert_eq!(graph.node_indices().collect::<Vec<_>>(), vec![n0, n1, n2]);

        graph.clear();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_sorted_neighbors_order_by_node_data() {
        let mut graph = new::<&'static str, u32>();
        let hub = graph.add_node("hub");
        let zoo = graph.add_node("zoo");
        let airport = graph.add_node("airport");
        let market = graph.add_node("market");
        graph.add_edge(hub, zoo, 1);
        graph.add_edge(market, hub, 1);
        graph.add_edge(hub, airport, 1);

        let order: Vec<_> = graph
            .sorted_neighbors(hub)
            .into_iter()
            .map(|n| *graph.node_data(n.node_id))
            .collect();
        assert_eq!(order, vec!["airport", "market", "zoo"]);
    }
}
