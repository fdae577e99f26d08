use ahash::{AHashMap, AHashSet};
use serde::Serialize;
use tracing::warn;

use crate::{
    errors::RouteGraphError,
    graph::{Position, Route},
    store::RouteStore,
};

/// Counts of records that break the route invariants.
///
/// `self_loops` and `duplicate_positions` are the cases the walker cannot
/// tolerate; `dangling_routes` reference an airport code the store does not
/// know.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    pub total_airports: usize,
    pub total_routes: usize,
    pub self_loops: usize,
    pub duplicate_positions: usize,
    pub dangling_routes: usize,
}

impl IntegrityReport {
    pub fn has_issues(&self) -> bool {
        self.self_loops > 0 || self.duplicate_positions > 0 || self.dangling_routes > 0
    }
}

pub fn check_integrity<S: RouteStore>(store: &S) -> Result<IntegrityReport, RouteGraphError> {
    let airports = store.airports()?;
    let routes = store.routes()?;
    let report = inspect(airports.iter().map(|a| a.code.as_str()), &routes);
    if report.has_issues() {
        warn!(
            self_loops = report.self_loops,
            duplicate_positions = report.duplicate_positions,
            dangling_routes = report.dangling_routes,
            "route graph integrity issues"
        );
    }
    Ok(report)
}

fn inspect<'a>(codes: impl Iterator<Item = &'a str>, routes: &[Route]) -> IntegrityReport {
    let known: AHashSet<&str> = codes.collect();
    let mut slots: AHashMap<(&str, Position), usize> = AHashMap::new();
    let mut report = IntegrityReport {
        total_airports: known.len(),
        total_routes: routes.len(),
        ..IntegrityReport::default()
    };
    for route in routes {
        if route.from == route.to {
            report.self_loops += 1;
        }
        if !known.contains(route.from.as_str()) || !known.contains(route.to.as_str()) {
            report.dangling_routes += 1;
        }
        *slots.entry((route.from.as_str(), route.position)).or_default() += 1;
    }
    report.duplicate_positions = slots.values().map(|count| count - 1).sum();
    report
}
