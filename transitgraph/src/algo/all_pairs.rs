use crate::algo::dijkstra::{DefaultDijkstra, DijkstraWeight, DijkstraWeightedEdgeData, ShortestPath};
use crate::interface::StaticGraph;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// The shortest paths between all ordered pairs of distinct nodes of a graph.
///
/// Pairs `(a, a)` are not stored. Unreachable targets are stored with an empty path and infinite distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllPairsShortestPaths<NodeIndex, WeightType> {
    paths: BTreeMap<NodeIndex, BTreeMap<NodeIndex, ShortestPath<NodeIndex, WeightType>>>,
}

impl<NodeIndex: Ord + Copy, WeightType: DijkstraWeight> AllPairsShortestPaths<NodeIndex, WeightType> {
    /// Returns the shortest path from `source` to `target`, or `None` if the pair is not stored, e.g. if `source == target`.
    pub fn get(
        &self,
        source: NodeIndex,
        target: NodeIndex,
    ) -> Option<&ShortestPath<NodeIndex, WeightType>> {
        self.paths.get(&source)?.get(&target)
    }

    /// Returns an iterator over all stored pairs as `(source, target, shortest path)`, ordered by source and then target.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (NodeIndex, NodeIndex, &ShortestPath<NodeIndex, WeightType>)> {
        self.paths.iter().flat_map(|(&source, targets)| {
            targets
                .iter()
                .map(move |(&target, path)| (source, target, path))
        })
    }

    /// Returns the amount of stored pairs.
    pub fn len(&self) -> usize {
        self.paths.values().map(BTreeMap::len).sum()
    }

    /// Returns true if no pairs are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Computes the shortest paths between all ordered pairs of distinct nodes by running Dijkstra's algorithm once from each node.
/// The Dijkstra data structures are shared between the runs.
pub fn all_pairs_shortest_paths<
    WeightType: DijkstraWeight + Copy + Eq + Debug,
    Graph: StaticGraph,
>(
    graph: &Graph,
) -> AllPairsShortestPaths<Graph::NodeIndex, WeightType>
where
    Graph::EdgeData: DijkstraWeightedEdgeData<WeightType>,
{
    let mut dijkstra = DefaultDijkstra::new(graph);
    let mut paths = BTreeMap::new();

    for source in graph.node_indices() {
        let single_source = dijkstra.shortest_paths_from(graph, source);
        let targets: BTreeMap<_, _> = graph
            .node_indices()
            .filter(|&target| target != source)
            .map(|target| (target, single_source.shortest_path(target)))
            .collect();
        paths.insert(source, targets);
    }

    debug!(
        "Computed all pairs shortest paths for {} nodes",
        graph.node_count()
    );
    AllPairsShortestPaths { paths }
}
