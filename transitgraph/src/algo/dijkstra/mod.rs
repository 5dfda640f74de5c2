use crate::index::{GraphIndex, OptionalGraphIndex};
use crate::interface::{GraphBase, StaticGraph};
use crate::walks::NodeWalk;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::Add;

/// Dijkstra's algorithm with reusable, epoch-cleared node arrays.
pub type DefaultDijkstra<Graph, WeightType> = Dijkstra<Graph, WeightType>;

/// A travel cost that Dijkstra's algorithm can add up and compare.
/// Weights are expected to be non-negative, and `infinity()` marks unreachable nodes.
pub trait DijkstraWeight: Ord + Add<Output = Self> + Sized + Clone {
    /// The distance of unreachable nodes, larger than any real distance.
    fn infinity() -> Self;

    /// The distance from a node to itself.
    fn zero() -> Self;

    /// The sum of both distances, or `None` if it is not representable.
    fn checked_add(self, other: Self) -> Option<Self>;
}

macro_rules! impl_dijkstra_weight_for_integers {
    ($($weight_type:ty),*) => {
        $(
            impl DijkstraWeight for $weight_type {
                #[inline]
                fn infinity() -> Self {
                    <$weight_type>::MAX
                }

                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn checked_add(self, other: Self) -> Option<Self> {
                    <$weight_type>::checked_add(self, other)
                }
            }
        )*
    };
}

impl_dijkstra_weight_for_integers!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Edge data that carries a travel cost.
pub trait DijkstraWeightedEdgeData<WeightType: DijkstraWeight> {
    /// The cost of traversing the edge.
    fn weight(&self) -> WeightType;
}

impl<WeightType: DijkstraWeight + Copy> DijkstraWeightedEdgeData<WeightType> for WeightType {
    #[inline]
    fn weight(&self) -> WeightType {
        *self
    }
}

/// A set of node indices that can be emptied in constant time.
///
/// Each slot stores the epoch in which it was last inserted, and a slot counts as present only if its epoch is the current one.
/// Emptying the set advances the current epoch, the slots are only rewritten when the epoch counter wraps around.
pub struct EpochArray {
    epochs: Vec<u32>,
    current_epoch: u32,
}

impl EpochArray {
    /// An empty set for indices below `len`.
    pub fn new(len: usize) -> Self {
        Self {
            epochs: vec![0; len],
            current_epoch: 1,
        }
    }

    /// Removes all indices from the set.
    pub fn clear(&mut self) {
        if self.current_epoch == u32::MAX {
            self.epochs.iter_mut().for_each(|epoch| *epoch = 0);
            self.current_epoch = 1;
        } else {
            self.current_epoch += 1;
        }
    }

    /// Returns true if `index` is in the set.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.epochs[index] == self.current_epoch
    }

    /// Adds `index` to the set.
    /// Returns false if it was already present, like `HashSet::insert`.
    #[inline]
    pub fn insert(&mut self, index: usize) -> bool {
        let was_present = self.contains(index);
        self.epochs[index] = self.current_epoch;
        !was_present
    }
}

/// Tentative distances of the nodes during one run.
/// Nodes that were not reached in the current run have distance `WeightType::infinity()`.
struct TentativeDistances<WeightType> {
    distances: Vec<WeightType>,
    reached: EpochArray,
}

impl<WeightType: DijkstraWeight + Copy> TentativeDistances<WeightType> {
    fn new(len: usize) -> Self {
        Self {
            distances: vec![WeightType::infinity(); len],
            reached: EpochArray::new(len),
        }
    }

    fn reset(&mut self) {
        self.reached.clear();
    }

    #[inline]
    fn get(&self, node: usize) -> WeightType {
        if self.reached.contains(node) {
            self.distances[node]
        } else {
            WeightType::infinity()
        }
    }

    #[inline]
    fn set(&mut self, node: usize, distance: WeightType) {
        self.reached.insert(node);
        self.distances[node] = distance;
    }
}

/// A shortest path together with its total weight.
///
/// If the target is unreachable, the path is empty and the distance is `WeightType::infinity()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath<NodeIndex, WeightType> {
    /// The nodes of the path, from source to target.
    pub path: NodeWalk<NodeIndex>,
    /// The sum of the edge weights along the path.
    pub distance: WeightType,
}

impl<NodeIndex, WeightType: DijkstraWeight> ShortestPath<NodeIndex, WeightType> {
    /// The entry for an unreachable target.
    pub fn unreachable() -> Self {
        Self {
            path: NodeWalk::default(),
            distance: WeightType::infinity(),
        }
    }

    /// Returns true if a path to the target exists.
    pub fn is_reachable(&self) -> bool {
        self.distance != WeightType::infinity()
    }
}

/// The result of a complete single-source run of Dijkstra's algorithm.
/// Stores the final distance and the back pointer of each node.
pub struct SingleSourceShortestPaths<Graph: GraphBase, WeightType> {
    source: Graph::NodeIndex,
    distances: Vec<WeightType>,
    back_pointers: Vec<Graph::OptionalNodeIndex>,
}

impl<Graph: GraphBase, WeightType: DijkstraWeight + Copy>
    SingleSourceShortestPaths<Graph, WeightType>
{
    /// The source node of the run.
    pub fn source(&self) -> Graph::NodeIndex {
        self.source
    }

    /// The distance from the source to the given target, or `WeightType::infinity()` if the target is unreachable.
    pub fn distance(&self, target: Graph::NodeIndex) -> WeightType {
        self.distances[target.as_usize()]
    }

    /// Returns true if the given target is reachable from the source.
    pub fn is_reachable(&self, target: Graph::NodeIndex) -> bool {
        self.distance(target) != WeightType::infinity()
    }

    /// Reconstructs the path from the source to the given target by following back pointers from the target.
    /// Returns an empty walk if the target is unreachable.
    pub fn path_to(&self, target: Graph::NodeIndex) -> NodeWalk<Graph::NodeIndex> {
        if !self.is_reachable(target) {
            return NodeWalk::default();
        }

        walk_back_pointers::<Graph>(&self.back_pointers, target)
    }

    /// Returns the shortest path from the source to the given target together with its distance.
    pub fn shortest_path(
        &self,
        target: Graph::NodeIndex,
    ) -> ShortestPath<Graph::NodeIndex, WeightType> {
        if self.is_reachable(target) {
            ShortestPath {
                path: self.path_to(target),
                distance: self.distance(target),
            }
        } else {
            ShortestPath::unreachable()
        }
    }
}

/// Follows back pointers from `target` until a node without one, and returns the nodes visited in reverse.
fn walk_back_pointers<Graph: GraphBase>(
    back_pointers: &[Graph::OptionalNodeIndex],
    target: Graph::NodeIndex,
) -> NodeWalk<Graph::NodeIndex> {
    let mut walk: Vec<_> = std::iter::successors(Some(target), |&current| {
        back_pointers[current.as_usize()].into()
    })
    .collect();
    walk.reverse();
    walk.into()
}

/// Reusable state for Dijkstra's shortest path algorithm.
///
/// The frontier is a min-heap keyed by `(tentative distance, node index)`, so among equally distant nodes the one with the lower index is settled first.
/// A tentative distance is only replaced if the new one is strictly smaller, hence the first discovered predecessor wins ties.
/// All per-run state is reset in constant time, so one instance can answer many queries on the same graph.
pub struct Dijkstra<Graph: GraphBase, WeightType> {
    frontier: BinaryHeap<Reverse<(WeightType, Graph::NodeIndex)>>,
    predecessors: Vec<Graph::OptionalNodeIndex>,
    distances: TentativeDistances<WeightType>,
    settled: EpochArray,
    graph: PhantomData<Graph>,
}

impl<
        WeightType: DijkstraWeight + Copy + Eq + Debug,
        EdgeData: DijkstraWeightedEdgeData<WeightType>,
        Graph: StaticGraph<EdgeData = EdgeData>,
    > Dijkstra<Graph, WeightType>
{
    /// Allocates the state for queries on `graph`.
    pub fn new(graph: &Graph) -> Self {
        Self {
            frontier: BinaryHeap::new(),
            predecessors: vec![Graph::OptionalNodeIndex::new_none(); graph.node_count()],
            distances: TentativeDistances::new(graph.node_count()),
            settled: EpochArray::new(graph.node_count()),
            graph: PhantomData,
        }
    }

    /// Settles nodes in order of their distance from `source`, until `target` is settled or nothing is left to explore.
    /// With `target == None` all nodes reachable from `source` are settled.
    fn run(&mut self, graph: &Graph, source: Graph::NodeIndex, target: Option<Graph::NodeIndex>) {
        self.frontier.clear();
        self.distances.reset();
        self.settled.clear();

        self.distances.set(source.as_usize(), WeightType::zero());
        self.predecessors[source.as_usize()] = Graph::OptionalNodeIndex::new_none();
        self.frontier.push(Reverse((WeightType::zero(), source)));

        let mut settled_count = 0usize;
        while let Some(Reverse((distance, node))) = self.frontier.pop() {
            // Stale entry, the node was settled with a smaller key before.
            if !self.settled.insert(node.as_usize()) {
                continue;
            }
            debug_assert_eq!(self.distances.get(node.as_usize()), distance);
            settled_count += 1;

            if target == Some(node) {
                break;
            }

            for neighbor in graph.neighbors(node) {
                let neighbor_id = neighbor.node_id.as_usize();
                if self.settled.contains(neighbor_id) {
                    continue;
                }

                // Distances that reach infinity are not representable, such edges count as untraversable.
                let weight = graph.edge_data(neighbor.edge_id).weight();
                let candidate = match distance.checked_add(weight) {
                    Some(candidate) if candidate < WeightType::infinity() => candidate,
                    _ => continue,
                };
                if candidate < self.distances.get(neighbor_id) {
                    self.distances.set(neighbor_id, candidate);
                    self.predecessors[neighbor_id] = node.into();
                    self.frontier.push(Reverse((candidate, neighbor.node_id)));
                }
            }
        }

        trace!(
            "Dijkstra from {:?} settled {} of {} nodes",
            source,
            settled_count,
            graph.node_count()
        );
    }

    /// Computes the distances and predecessors of all nodes relative to `source`.
    pub fn shortest_paths_from(
        &mut self,
        graph: &Graph,
        source: Graph::NodeIndex,
    ) -> SingleSourceShortestPaths<Graph, WeightType> {
        self.run(graph, source, None);

        SingleSourceShortestPaths {
            source,
            distances: graph
                .node_indices()
                .map(|node| self.distances.get(node.as_usize()))
                .collect(),
            back_pointers: self.predecessors.clone(),
        }
    }

    /// Computes one shortest path from `source` to `target`.
    /// The search stops as soon as `target` is settled.
    pub fn shortest_path(
        &mut self,
        graph: &Graph,
        source: Graph::NodeIndex,
        target: Graph::NodeIndex,
    ) -> ShortestPath<Graph::NodeIndex, WeightType> {
        self.run(graph, source, Some(target));
        if !self.settled.contains(target.as_usize()) {
            return ShortestPath::unreachable();
        }

        ShortestPath {
            path: walk_back_pointers::<Graph>(&self.predecessors, target),
            distance: self.distances.get(target.as_usize()),
        }
    }
}
