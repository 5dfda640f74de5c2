use rand::rngs::StdRng;
use rand::SeedableRng;
use transitgraph::algo::predefined_graphs::{
    create_city_transport_network, create_random_network, CITY_ROUTES, CITY_STOPS,
};
use transitgraph::io::{read_network_from_json, write_network_to_json};
use transitgraph::{ErrorKind, TransitNetwork};

fn city() -> TransitNetwork<i64> {
    create_city_transport_network().unwrap()
}

#[test]
fn test_city_statistics() {
    let network = city();
    assert_eq!(network.node_count(), 10);
    assert_eq!(network.edge_count(), 14);
    assert!(network.is_connected());
    assert_eq!(network.connected_components().len(), 1);
    assert_eq!(network.nodes().collect::<Vec<_>>(), CITY_STOPS.to_vec());

    for stop in CITY_STOPS {
        let expected = if stop == "Hospital" || stop == "Industrial Zone" {
            2
        } else {
            3
        };
        assert_eq!(network.degree(stop).unwrap(), expected, "{}", stop);
    }
    assert!((network.average_degree() - 2.8).abs() < 1e-9);
    assert_eq!(network.total_weight(), 138);
    assert_eq!(
        network.neighbors("Central Station").unwrap(),
        vec!["Airport", "City Hall", "Shopping Mall"]
    );
}

#[test]
fn test_city_dfs_and_bfs_paths() {
    let network = city();
    let expected = vec!["Central Station", "Airport", "Industrial Zone", "Beach"];
    assert_eq!(network.dfs_path("Central Station", "Beach").unwrap(), expected);
    assert_eq!(network.bfs_path("Central Station", "Beach").unwrap(), expected);

    // The depth-first path is valid but longer than the breadth-first one.
    assert_eq!(
        network.dfs_path("City Hall", "Beach").unwrap(),
        vec!["City Hall", "Central Station", "Airport", "Industrial Zone", "Beach"]
    );
    assert_eq!(
        network.bfs_path("City Hall", "Beach").unwrap(),
        vec!["City Hall", "Sports Center", "Beach"]
    );

    assert_eq!(
        network.bfs_path("Industrial Zone", "Hospital").unwrap(),
        vec!["Industrial Zone", "Beach", "Sports Center", "Hospital"]
    );
    assert_eq!(
        network.dfs_path("Industrial Zone", "Hospital").unwrap(),
        vec![
            "Industrial Zone",
            "Airport",
            "Central Station",
            "City Hall",
            "Sports Center",
            "Beach",
            "University",
            "Park",
            "Shopping Mall",
            "Hospital"
        ]
    );

    assert_eq!(network.dfs_path("Park", "Park").unwrap(), vec!["Park"]);
    assert_eq!(network.bfs_path("Park", "Park").unwrap(), vec!["Park"]);
}

#[test]
fn test_city_paths_are_deterministic() {
    let network = city();
    let first = network.dfs_path("Hospital", "Airport").unwrap();
    for _ in 0..10 {
        assert_eq!(network.dfs_path("Hospital", "Airport").unwrap(), first);
    }

    // Reversed route input yields the same searches.
    let reversed_routes: Vec<_> = CITY_ROUTES
        .iter()
        .rev()
        .map(|&(from, to, weight)| (to, from, weight))
        .collect();
    let reversed = TransitNetwork::new(CITY_STOPS, reversed_routes).unwrap();
    for start in CITY_STOPS {
        for end in CITY_STOPS {
            assert_eq!(
                network.dfs_path(start, end).unwrap(),
                reversed.dfs_path(start, end).unwrap()
            );
            assert_eq!(
                network.bfs_path(start, end).unwrap(),
                reversed.bfs_path(start, end).unwrap()
            );
        }
    }
}

#[test]
fn test_city_shortest_paths() {
    let network = city();
    let cases = [
        (
            "Central Station",
            "Beach",
            25,
            vec!["Central Station", "City Hall", "University", "Beach"],
        ),
        ("Central Station", "Airport", 20, vec!["Central Station", "Airport"]),
        ("City Hall", "Beach", 20, vec!["City Hall", "University", "Beach"]),
        (
            "City Hall",
            "Airport",
            22,
            vec!["City Hall", "University", "Park", "Airport"],
        ),
        (
            "Beach",
            "Central Station",
            25,
            vec!["Beach", "University", "City Hall", "Central Station"],
        ),
        (
            "Industrial Zone",
            "Hospital",
            27,
            vec!["Industrial Zone", "Beach", "Sports Center", "Hospital"],
        ),
    ];

    let all_pairs = network.all_pairs_routes();
    for (start, end, distance, stops) in cases {
        let route = network.shortest_path(start, end).unwrap();
        assert_eq!(route.distance, Some(distance));
        assert_eq!(route.stops, stops);
        assert_eq!(all_pairs[start][end], route);
    }

    // Two routes of 20 minutes exist, only the distance is fixed.
    assert_eq!(
        network.shortest_path("City Hall", "Hospital").unwrap().distance,
        Some(20)
    );
}

#[test]
fn test_city_all_pairs_properties() {
    let network = city();
    let all_pairs = network.all_pairs_routes();
    assert_eq!(all_pairs.len(), 10);

    for start in CITY_STOPS {
        assert_eq!(all_pairs[start].len(), 9);
        assert!(!all_pairs[start].contains_key(start));

        for end in CITY_STOPS.iter().filter(|&&end| end != start) {
            let route = &all_pairs[start][end];
            let reverse = &all_pairs[end][start];
            assert_eq!(route.distance, reverse.distance);
            assert_eq!(route.stops.first(), Some(&start));
            assert_eq!(route.stops.last(), Some(end));

            let weight: i64 = route
                .stops
                .windows(2)
                .map(|pair| {
                    network
                        .edges()
                        .find(|&(from, to, _)| {
                            (from == pair[0] && to == pair[1]) || (from == pair[1] && to == pair[0])
                        })
                        .map(|(_, _, weight)| weight)
                        .unwrap()
                })
                .sum();
            assert_eq!(Some(weight), route.distance);

            let hops = network.bfs_path(start, end).unwrap().len();
            assert!(route.stops.len() >= hops);
        }
    }
}

#[test]
fn test_invalid_networks() {
    let error = TransitNetwork::new(vec!["X"], vec![("X", "Y", 3i64)]).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::InvalidEdge(from, to) if from == "X" && to == "Y"));

    let error = TransitNetwork::new(vec!["A", "B"], vec![("A", "B", -1i64)]).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NegativeWeight(from, to, _) if from == "A" && to == "B"));

    let error = city().neighbors("Lighthouse").unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::UnknownNode(name) if name == "Lighthouse"));
    assert_eq!(error.to_string(), "unknown node: 'Lighthouse'");
}

#[test]
fn test_disconnected_network() {
    let network = TransitNetwork::new(
        vec!["North", "South", "East", "West", "Island"],
        vec![("North", "South", 4i64), ("East", "West", 2), ("South", "East", 9)],
    )
    .unwrap();

    assert!(!network.is_connected());
    assert_eq!(
        network.connected_components(),
        vec![vec!["North", "South", "East", "West"], vec!["Island"]]
    );
    assert!(network.dfs_path("North", "Island").unwrap().is_empty());
    assert!(network.bfs_path("Island", "West").unwrap().is_empty());

    let route = network.shortest_path("West", "Island").unwrap();
    assert!(route.stops.is_empty());
    assert_eq!(route.distance, None);
    assert_eq!(network.all_pairs_routes()["Island"]["North"].distance, None);
}

#[test]
fn test_empty_network() {
    let network =
        TransitNetwork::<i64>::new(Vec::<String>::new(), Vec::<(String, String, i64)>::new())
            .unwrap();
    assert_eq!(network.node_count(), 0);
    assert!(network.is_connected());
    assert!(network.all_pairs_routes().is_empty());
    assert_eq!(network.average_degree(), 0.0);
}

#[test]
fn test_json_round_trip_of_city() {
    let network = city();
    let mut output = Vec::new();
    write_network_to_json(&network, &mut output).unwrap();
    let read: TransitNetwork<i64> = read_network_from_json(output.as_slice()).unwrap();

    assert_eq!(read.to_description(), network.to_description());
    assert_eq!(
        read.shortest_path("Central Station", "Beach").unwrap(),
        network.shortest_path("Central Station", "Beach").unwrap()
    );
}

#[test]
fn test_random_networks_are_consistent() {
    let mut random = StdRng::seed_from_u64(2022);
    for _ in 0..5 {
        let network = create_random_network(15, 0.2, 30, &mut random).unwrap();
        let components = network.connected_components();
        assert_eq!(network.is_connected(), components.len() == 1);

        for (start, targets) in network.all_pairs_routes() {
            for (end, route) in targets {
                let same_component = components
                    .iter()
                    .any(|component| component.contains(&start) && component.contains(&end));
                assert_eq!(route.distance.is_some(), same_component);
                assert_eq!(network.bfs_path(start, end).unwrap().is_empty(), !same_component);
                assert_eq!(network.dfs_path(start, end).unwrap().is_empty(), !same_component);
            }
        }
    }
}
