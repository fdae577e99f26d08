use routegraph::{Airport, Position, Route, RouteGraph, RoutePath};

fn build_graph(codes: &[&str], routes: &[Route]) -> RouteGraph {
    let graph = RouteGraph::open_in_memory().expect("graph");
    for code in codes {
        graph
            .insert_airport(&Airport::new(*code, format!("Airport {code}")))
            .expect("airport");
    }
    for route in routes {
        graph.insert_route(route).expect("route");
    }
    graph
}

/// A -L(100)-> B -L(100)-> D
/// A -R(50)->  C -R(60)->  D
/// D -L(5)->   A
fn diamond() -> RouteGraph {
    build_graph(
        &["A", "B", "C", "D", "E"],
        &[
            Route::new("A", "B", Position::Left, 100),
            Route::new("B", "D", Position::Left, 100),
            Route::new("A", "C", Position::Right, 50),
            Route::new("C", "D", Position::Right, 60),
            Route::new("D", "A", Position::Left, 5),
        ],
    )
}

#[test]
fn test_multi_hop_picks_cheapest_branch() {
    let graph = diamond();
    let path = graph
        .query()
        .shortest_path("A", "D")
        .unwrap()
        .expect("reachable");
    assert_eq!(path.distance, 110);
    assert_eq!(path.path, vec!["A", "C", "D"]);
    assert_eq!(
        path.routes,
        vec![
            Route::new("A", "C", Position::Right, 50),
            Route::new("C", "D", Position::Right, 60),
        ]
    );
}

#[test]
fn test_routes_connect_consecutive_codes() {
    let graph = diamond();
    let path = graph.query().shortest_path("B", "C").unwrap().expect("path");
    assert_eq!(path.path, vec!["B", "D", "A", "C"]);
    assert_eq!(path.routes.len(), path.path.len() - 1);
    for (route, pair) in path.routes.iter().zip(path.path.windows(2)) {
        assert_eq!(route.from, pair[0]);
        assert_eq!(route.to, pair[1]);
    }
    let total: u64 = path.routes.iter().map(|r| u64::from(r.duration)).sum();
    assert_eq!(total, path.distance);
}

#[test]
fn test_self_path_is_zero() {
    let graph = diamond();
    let path = graph.query().shortest_path("B", "B").unwrap();
    assert_eq!(
        path,
        Some(RoutePath {
            distance: 0,
            path: vec!["B".into()],
            routes: vec![],
        })
    );
}

#[test]
fn test_direction_is_respected() {
    let graph = build_graph(
        &["A", "B"],
        &[Route::new("A", "B", Position::Left, 10)],
    );
    let query = graph.query();
    assert!(query.shortest_path("A", "B").unwrap().is_some());
    assert!(query.shortest_path("B", "A").unwrap().is_none());
}

#[test]
fn test_asymmetric_costs() {
    let graph = build_graph(
        &["A", "B", "C"],
        &[
            Route::new("A", "B", Position::Left, 10),
            Route::new("B", "A", Position::Left, 30),
            Route::new("B", "C", Position::Right, 1),
            Route::new("C", "A", Position::Right, 2),
        ],
    );
    let query = graph.query();
    assert_eq!(query.shortest_path("A", "B").unwrap().unwrap().distance, 10);
    let back = query.shortest_path("B", "A").unwrap().unwrap();
    assert_eq!(back.distance, 3);
    assert_eq!(back.path, vec!["B", "C", "A"]);
}

#[test]
fn test_disconnected_airports_are_absent() {
    let graph = diamond();
    assert!(graph.query().shortest_path("A", "E").unwrap().is_none());
    assert!(graph.query().shortest_path("E", "A").unwrap().is_none());
}

#[test]
fn test_unknown_endpoint_is_absent() {
    let graph = diamond();
    assert!(graph.query().shortest_path("A", "ZZ").unwrap().is_none());
    assert!(graph.query().shortest_path("ZZ", "A").unwrap().is_none());
}

#[test]
fn test_zero_weight_routes() {
    let graph = build_graph(
        &["A", "B", "C"],
        &[
            Route::new("A", "B", Position::Left, 0),
            Route::new("B", "C", Position::Left, 0),
            Route::new("A", "C", Position::Right, 1),
        ],
    );
    let path = graph.query().shortest_path("A", "C").unwrap().unwrap();
    assert_eq!(path.distance, 0);
    assert_eq!(path.path, vec!["A", "B", "C"]);
}

#[test]
fn test_equal_cost_paths_resolve_deterministically() {
    let graph = build_graph(
        &["A", "B", "C", "D"],
        &[
            Route::new("A", "C", Position::Left, 5),
            Route::new("A", "B", Position::Right, 5),
            Route::new("B", "D", Position::Left, 5),
            Route::new("C", "D", Position::Left, 5),
        ],
    );
    let query = graph.query();
    let first = query.shortest_path("A", "D").unwrap().unwrap();
    assert_eq!(first.distance, 10);
    for _ in 0..5 {
        assert_eq!(query.shortest_path("A", "D").unwrap().unwrap(), first);
    }
    // B settles before C, so D is first reached through B
    assert_eq!(first.path, vec!["A", "B", "D"]);
}

#[test]
fn test_long_chain_accumulates_distance() {
    let codes: Vec<String> = (0..50).map(|i| format!("N{i:02}")).collect();
    let refs: Vec<&str> = codes.iter().map(String::as_str).collect();
    let routes: Vec<Route> = codes
        .windows(2)
        .map(|pair| Route::new(pair[0].clone(), pair[1].clone(), Position::Left, 1000))
        .collect();
    let graph = build_graph(&refs, &routes);
    let path = graph.query().shortest_path("N00", "N49").unwrap().unwrap();
    assert_eq!(path.distance, 49_000);
    assert_eq!(path.path.len(), 50);
}
