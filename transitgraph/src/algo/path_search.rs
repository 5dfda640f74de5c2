use crate::algo::traversal::PreOrderSortedBfs;
use crate::index::GraphIndex;
use crate::interface::StaticGraph;
use crate::walks::NodeWalk;

/// Finds a path from `start` to `end` with an iterative depth-first search.
///
/// Neighbors are explored ordered by their node data, ties broken by node index.
/// A node is marked as visited the first time it is entered, and a branch that runs into a dead end is removed from the path again.
/// The first path that reaches `end` is returned, which is not necessarily a shortest one.
///
/// Returns the walk `[start]` if `start == end`, and an empty walk if `end` is not reachable from `start`.
pub fn dfs_path<Graph: StaticGraph>(
    graph: &Graph,
    start: Graph::NodeIndex,
    end: Graph::NodeIndex,
) -> NodeWalk<Graph::NodeIndex>
where
    Graph::NodeData: Ord,
{
    if start == end {
        return vec![start].into();
    }

    let mut visited = vec![false; graph.node_count()];
    visited[start.as_usize()] = true;
    let mut path = vec![start];
    let mut stack = vec![graph.sorted_neighbors(start).into_iter()];

    while let Some(neighbors) = stack.last_mut() {
        if let Some(neighbor) = neighbors.find(|neighbor| !visited[neighbor.node_id.as_usize()]) {
            let node = neighbor.node_id;
            visited[node.as_usize()] = true;
            path.push(node);
            if node == end {
                trace!("DFS found a path with {} nodes", path.len());
                return path.into();
            }
            stack.push(graph.sorted_neighbors(node).into_iter());
        } else {
            // Dead end
            stack.pop();
            path.pop();
        }
    }

    trace!("DFS found no path from {:?} to {:?}", start, end);
    NodeWalk::default()
}

/// Finds a path from `start` to `end` with the minimum amount of edges using a breadth-first search.
///
/// Neighbors are discovered ordered by their node data, ties broken by node index, so among several paths of minimum length the result is deterministic.
/// The search stops as soon as `end` is dequeued.
///
/// Returns the walk `[start]` if `start == end`, and an empty walk if `end` is not reachable from `start`.
pub fn bfs_path<Graph: StaticGraph>(
    graph: &Graph,
    start: Graph::NodeIndex,
    end: Graph::NodeIndex,
) -> NodeWalk<Graph::NodeIndex>
where
    Graph::NodeData: Ord,
{
    let mut bfs = PreOrderSortedBfs::new(graph, start);
    if let Some(position) = (&mut bfs).position(|node| node == end) {
        trace!("BFS dequeued {} nodes", position + 1);
        return bfs.path_to(end);
    }

    trace!("BFS found no path from {:?} to {:?}", start, end);
    NodeWalk::default()
}
