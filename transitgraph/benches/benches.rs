use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use transitgraph::algo::all_pairs::all_pairs_shortest_paths;
use transitgraph::algo::dijkstra::DefaultDijkstra;
use transitgraph::algo::path_search::{bfs_path, dfs_path};
use transitgraph::algo::predefined_graphs::{
    create_city_transport_network, create_random_graph, create_random_network,
};
use transitgraph::algo::traversal::{PreOrderBfs, PreOrderSortedBfs};
use transitgraph::implementation::petgraph_impl;
use transitgraph::interface::ImmutableGraphContainer;

fn bench_city_path_searches(criterion: &mut Criterion) {
    let network = create_city_transport_network().unwrap();

    criterion.bench_function("city_dfs_path", |b| {
        b.iter(|| black_box(network.dfs_path("Industrial Zone", "Hospital").unwrap()))
    });
    criterion.bench_function("city_bfs_path", |b| {
        b.iter(|| black_box(network.bfs_path("Industrial Zone", "Hospital").unwrap()))
    });
    criterion.bench_function("city_all_pairs_routes", |b| {
        b.iter(|| black_box(network.all_pairs_routes()))
    });
}

fn bench_petgraph_preorder_bfs_random_1000(criterion: &mut Criterion) {
    let mut random = StdRng::seed_from_u64(0);
    let mut graph = petgraph_impl::new::<(), u32>();
    create_random_graph(&mut graph, 1000, 0.01, 100, &mut random);
    let start = graph.node_indices().next().unwrap();
    let mut traversal = PreOrderBfs::new(&graph, start);

    criterion.bench_function("petgraph_bfs_random_1000", |b| {
        b.iter(|| {
            traversal.reset(start);
            for e in &mut traversal {
                black_box(e);
            }
        })
    });

    let mut sorted_traversal = PreOrderSortedBfs::new(&graph, start);
    criterion.bench_function("petgraph_sorted_bfs_random_1000", |b| {
        b.iter(|| {
            sorted_traversal.reset(start);
            for e in &mut sorted_traversal {
                black_box(e);
            }
        })
    });
}

fn bench_petgraph_path_search_random_1000(criterion: &mut Criterion) {
    let mut random = StdRng::seed_from_u64(1);
    let mut graph = petgraph_impl::new::<(), u32>();
    create_random_graph(&mut graph, 1000, 0.01, 100, &mut random);
    let start = graph.node_indices().next().unwrap();
    let end = graph.node_indices().last().unwrap();

    criterion.bench_function("petgraph_dfs_path_random_1000", |b| {
        b.iter(|| black_box(dfs_path(&graph, start, end)))
    });
    criterion.bench_function("petgraph_bfs_path_random_1000", |b| {
        b.iter(|| black_box(bfs_path(&graph, start, end)))
    });
}

fn bench_petgraph_dijkstra_random_1000(criterion: &mut Criterion) {
    let mut random = StdRng::seed_from_u64(2);
    let mut graph = petgraph_impl::new::<(), u32>();
    create_random_graph(&mut graph, 1000, 0.01, 100, &mut random);
    let start = graph.node_indices().next().unwrap();
    let mut dijkstra = DefaultDijkstra::<_, u32>::new(&graph);

    criterion.bench_function("petgraph_dijkstra_single_source_random_1000", |b| {
        b.iter(|| black_box(dijkstra.shortest_paths_from(&graph, start).distance(start)))
    });
}

fn bench_all_pairs_random_network_100(criterion: &mut Criterion) {
    let mut random = StdRng::seed_from_u64(3);
    let network = create_random_network(100, 0.05, 60, &mut random).unwrap();

    criterion.bench_function("all_pairs_random_network_100", |b| {
        b.iter(|| black_box(all_pairs_shortest_paths::<i64, _>(network.graph()).len()))
    });
}

criterion_group!(
    benches,
    bench_city_path_searches,
    bench_petgraph_preorder_bfs_random_1000,
    bench_petgraph_path_search_random_1000,
    bench_petgraph_dijkstra_random_1000,
    bench_all_pairs_random_network_100,
);
criterion_main!(benches);
