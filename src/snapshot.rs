//! Point-in-time, in-memory copy of the airport/route set.
//!
//! A snapshot never changes after it is built, so any number of threads may
//! query it at once and repeated queries see the same answer.

use ahash::AHashMap;

use crate::{
    errors::RouteGraphError,
    graph::{Airport, Position, Route},
    query::RouteQuery,
    store::RouteStore,
};

#[derive(Clone, Debug, Default)]
pub struct GraphSnapshot {
    airports: AHashMap<String, Airport>,
    slots: AHashMap<(String, Position), Route>,
}

impl GraphSnapshot {
    /// Copies every airport and route out of `store`.
    pub fn load<S: RouteStore>(store: &S) -> Result<Self, RouteGraphError> {
        Ok(Self::from_parts(store.airports()?, store.routes()?))
    }

    /// Builds a snapshot from raw records. Routes sharing a `(from, position)`
    /// slot overwrite each other in iteration order.
    pub fn from_parts(
        airports: impl IntoIterator<Item = Airport>,
        routes: impl IntoIterator<Item = Route>,
    ) -> Self {
        let mut snapshot = Self::default();
        for airport in airports {
            snapshot.put_airport(airport);
        }
        for route in routes {
            snapshot.put_route(route);
        }
        snapshot
    }

    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    pub fn route_count(&self) -> usize {
        self.slots.len()
    }

    pub fn query(&self) -> RouteQuery<'_, Self> {
        RouteQuery::new(self)
    }

    pub(crate) fn contains_airport(&self, code: &str) -> bool {
        self.airports.contains_key(code)
    }

    pub(crate) fn put_airport(&mut self, airport: Airport) -> Option<Airport> {
        self.airports.insert(airport.code.clone(), airport)
    }

    pub(crate) fn put_route(&mut self, route: Route) -> Option<Route> {
        self.slots
            .insert((route.from.clone(), route.position), route)
    }

    pub(crate) fn take_route(&mut self, from: &str, position: Position) -> Option<Route> {
        self.slots.remove(&(from.to_string(), position))
    }
}

impl RouteStore for GraphSnapshot {
    fn airport(&self, code: &str) -> Result<Option<Airport>, RouteGraphError> {
        Ok(self.airports.get(code).cloned())
    }

    fn routes(&self) -> Result<Vec<Route>, RouteGraphError> {
        let mut routes: Vec<Route> = self.slots.values().cloned().collect();
        routes.sort_by(|a, b| a.from.cmp(&b.from).then(a.position.cmp(&b.position)));
        Ok(routes)
    }

    fn airports(&self) -> Result<Vec<Airport>, RouteGraphError> {
        let mut airports: Vec<Airport> = self.airports.values().cloned().collect();
        airports.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(airports)
    }

    fn route_from(
        &self,
        code: &str,
        position: Position,
    ) -> Result<Option<Route>, RouteGraphError> {
        Ok(self.slots.get(&(code.to_string(), position)).cloned())
    }

    fn routes_from(&self, code: &str) -> Result<Vec<Route>, RouteGraphError> {
        let mut routes = Vec::with_capacity(Position::ALL.len());
        for position in Position::ALL {
            if let Some(route) = self.slots.get(&(code.to_string(), position)) {
                routes.push(route.clone());
            }
        }
        Ok(routes)
    }
}
