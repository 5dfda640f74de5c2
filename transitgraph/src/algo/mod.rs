/// All-pairs shortest paths by repeating Dijkstra's algorithm from every node.
pub mod all_pairs;
/// Connected components and the connectivity check.
pub mod components;
/// Dijkstra's shortest path algorithm.
pub mod dijkstra;
/// Depth- and breadth-first search for a path between two nodes.
pub mod path_search;
/// The sample city transport network, as well as random graphs and networks.
pub mod predefined_graphs;
/// Preorder breadth-first traversals with ranks and parent pointers.
pub mod traversal;
