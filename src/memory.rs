//! Thread-safe in-memory route store.
//!
//! Readers share a `parking_lot` read lock; writers hold the write lock only
//! for the duration of a single mutation. Each query runs against whatever
//! state is visible when it reads, so a caller that needs several queries to
//! agree should take a [`GraphSnapshot`] first.

use parking_lot::RwLock;

use crate::{
    errors::RouteGraphError,
    graph::{Airport, Position, Route, validate_airport, validate_route},
    query::RouteQuery,
    snapshot::GraphSnapshot,
    store::RouteStore,
};

#[derive(Default)]
pub struct MemoryRouteStore {
    inner: RwLock<GraphSnapshot>,
}

impl MemoryRouteStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(GraphSnapshot::default()),
        }
    }

    /// Adds or renames an airport.
    pub fn put_airport(&self, airport: Airport) -> Result<(), RouteGraphError> {
        validate_airport(&airport)?;
        self.inner.write().put_airport(airport);
        Ok(())
    }

    /// Insert-or-replace keyed by `(from, position)`; returns the route that
    /// previously occupied the slot.
    pub fn upsert_route(&self, route: Route) -> Result<Option<Route>, RouteGraphError> {
        validate_route(&route)?;
        let mut inner = self.inner.write();
        if !inner.contains_airport(&route.from) || !inner.contains_airport(&route.to) {
            return Err(RouteGraphError::invalid_input(
                "route endpoints must reference existing airports",
            ));
        }
        Ok(inner.put_route(route))
    }

    pub fn remove_route(&self, from: &str, position: Position) -> Result<Route, RouteGraphError> {
        self.inner
            .write()
            .take_route(from, position)
            .ok_or_else(|| RouteGraphError::not_found(format!("{position} route from {from}")))
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        self.inner.read().clone()
    }

    pub fn query(&self) -> RouteQuery<'_, Self> {
        RouteQuery::new(self)
    }
}

impl RouteStore for MemoryRouteStore {
    fn airport(&self, code: &str) -> Result<Option<Airport>, RouteGraphError> {
        self.inner.read().airport(code)
    }

    fn routes(&self) -> Result<Vec<Route>, RouteGraphError> {
        self.inner.read().routes()
    }

    fn airports(&self) -> Result<Vec<Airport>, RouteGraphError> {
        self.inner.read().airports()
    }

    fn route_from(
        &self,
        code: &str,
        position: Position,
    ) -> Result<Option<Route>, RouteGraphError> {
        self.inner.read().route_from(code, position)
    }

    fn routes_from(&self, code: &str) -> Result<Vec<Route>, RouteGraphError> {
        self.inner.read().routes_from(code)
    }
}
