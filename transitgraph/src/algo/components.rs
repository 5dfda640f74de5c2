use crate::algo::traversal::PreOrderBfs;
use crate::interface::StaticGraph;

/// Returns the connected components of the graph as lists of node indices.
///
/// Each component is listed in BFS order from its smallest node index, and the components are ordered by their smallest node index.
/// The whole graph is covered by a single traversal that is continued from each node not yet discovered.
pub fn connected_components<Graph: StaticGraph>(graph: &Graph) -> Vec<Vec<Graph::NodeIndex>> {
    let mut result = Vec::new();
    let mut bfs = PreOrderBfs::new_without_start(graph);

    for node in graph.node_indices() {
        if bfs.rank_of(node).is_some() {
            continue;
        }

        bfs.continue_traversal_from(node);
        let component: Vec<_> = (&mut bfs).collect();
        result.push(component);
    }

    debug!(
        "Found {} connected components in a graph with {} nodes",
        result.len(),
        graph.node_count()
    );
    result
}

/// Returns true if the graph is connected.
/// The empty graph is connected.
pub fn is_connected<Graph: StaticGraph>(graph: &Graph) -> bool {
    let start = if let Some(start) = graph.node_indices().next() {
        start
    } else {
        return true;
    };

    let visited = PreOrderBfs::new(graph, start).count();
    visited == graph.node_count()
}
