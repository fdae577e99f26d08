use tracing::info;

use crate::{
    errors::RouteGraphError,
    graph::{Airport, Position, Route, RouteGraph},
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeedStats {
    pub airports_created: usize,
    pub routes_written: usize,
}

/// Demo airports A, B, C with A->B left (150) and A->C right (250).
pub fn demo_airports() -> Vec<Airport> {
    vec![
        Airport::new("A", "Airport A"),
        Airport::new("B", "Airport B"),
        Airport::new("C", "Airport C"),
    ]
}

pub fn demo_routes() -> Vec<Route> {
    vec![
        Route::new("A", "B", Position::Left, 150),
        Route::new("A", "C", Position::Right, 250),
    ]
}

/// Writes the demo data. Safe to run repeatedly: airports are get-or-create,
/// routes are insert-or-replace on their `(from, position)` slot.
pub fn seed_demo(graph: &RouteGraph) -> Result<SeedStats, RouteGraphError> {
    let mut stats = SeedStats::default();
    for airport in demo_airports() {
        if graph.upsert_airport(&airport)? {
            stats.airports_created += 1;
        }
    }
    for route in demo_routes() {
        graph.upsert_route(&route)?;
        stats.routes_written += 1;
    }
    info!(
        airports_created = stats.airports_created,
        routes_written = stats.routes_written,
        "seeded airports and routes"
    );
    Ok(stats)
}
