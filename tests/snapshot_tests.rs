use std::{sync::Arc, thread};

use routegraph::{
    Airport, GraphSnapshot, MemoryRouteStore, Position, Route, RouteGraph, RouteGraphError,
    RouteStore,
};

fn memory_store() -> MemoryRouteStore {
    let store = MemoryRouteStore::new();
    for code in ["A", "B", "C"] {
        store
            .put_airport(Airport::new(code, format!("Airport {code}")))
            .unwrap();
    }
    store
        .upsert_route(Route::new("A", "B", Position::Left, 10))
        .unwrap();
    store
        .upsert_route(Route::new("B", "C", Position::Left, 10))
        .unwrap();
    store
}

#[test]
fn test_snapshot_load_copies_store() {
    let graph = RouteGraph::open_in_memory().unwrap();
    graph.insert_airport(&Airport::new("A", "Alpha")).unwrap();
    graph.insert_airport(&Airport::new("B", "Beta")).unwrap();
    graph
        .insert_route(&Route::new("A", "B", Position::Right, 3))
        .unwrap();
    let snapshot = GraphSnapshot::load(&graph).unwrap();
    assert_eq!(snapshot.airport_count(), 2);
    assert_eq!(snapshot.route_count(), 1);
    assert_eq!(snapshot.routes().unwrap(), graph.routes().unwrap());
    assert_eq!(snapshot.airports().unwrap(), graph.airports().unwrap());
}

#[test]
fn test_snapshot_is_isolated_from_later_writes() {
    let store = memory_store();
    let snapshot = store.snapshot();
    store
        .upsert_route(Route::new("A", "C", Position::Left, 1))
        .unwrap();
    let before = snapshot.query().nth_node("A", Position::Left, 1).unwrap();
    let after = store.query().nth_node("A", Position::Left, 1).unwrap();
    assert_eq!(before.map(|a| a.code), Some("B".into()));
    assert_eq!(after.map(|a| a.code), Some("C".into()));
}

#[test]
fn test_upsert_replaces_slot_and_returns_previous() {
    let store = memory_store();
    let previous = store
        .upsert_route(Route::new("A", "C", Position::Left, 99))
        .unwrap();
    assert_eq!(previous, Some(Route::new("A", "B", Position::Left, 10)));
    assert_eq!(store.routes_from("A").unwrap().len(), 1);
}

#[test]
fn test_memory_store_rejects_invalid_routes() {
    let store = memory_store();
    let self_loop = store
        .upsert_route(Route::new("A", "A", Position::Right, 1))
        .expect_err("self loop");
    assert!(matches!(self_loop, RouteGraphError::InvalidInput(_)));
    let dangling = store
        .upsert_route(Route::new("A", "Z", Position::Right, 1))
        .expect_err("unknown airport");
    assert!(matches!(dangling, RouteGraphError::InvalidInput(_)));
}

#[test]
fn test_remove_route() {
    let store = memory_store();
    store.remove_route("A", Position::Left).unwrap();
    assert!(store.route_from("A", Position::Left).unwrap().is_none());
    let err = store.remove_route("A", Position::Left).expect_err("gone");
    assert!(matches!(err, RouteGraphError::NotFound(_)));
}

#[test]
fn test_concurrent_queries_share_snapshot() {
    let snapshot = Arc::new(memory_store().snapshot());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let snapshot = Arc::clone(&snapshot);
            thread::spawn(move || {
                let query = snapshot.query();
                (
                    query.nth_node("A", Position::Left, 2).unwrap(),
                    query.shortest_path("A", "C").unwrap().map(|p| p.distance),
                )
            })
        })
        .collect();
    for handle in handles {
        let (walked, distance) = handle.join().unwrap();
        assert_eq!(walked.map(|a| a.code), Some("C".into()));
        assert_eq!(distance, Some(20));
    }
}

#[test]
fn test_concurrent_readers_and_writer_on_memory_store() {
    let store = Arc::new(memory_store());
    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for weight in 0..50 {
                store
                    .upsert_route(Route::new("C", "A", Position::Right, weight))
                    .unwrap();
            }
        })
    };
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..50 {
                    let path = store.query().shortest_path("A", "C").unwrap();
                    assert_eq!(path.map(|p| p.distance), Some(20));
                }
            })
        })
        .collect();
    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
}
