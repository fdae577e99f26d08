//! Read interface the query algorithms run against. [`RouteGraph`] answers it
//! from SQLite, [`crate::snapshot::GraphSnapshot`] and
//! [`crate::memory::MemoryRouteStore`] from memory. Implementations only report
//! faults through `Err`; a missing airport or route is `Ok(None)` / empty.

use crate::{
    errors::RouteGraphError,
    graph::{Airport, Position, Route, RouteGraph},
};

pub trait RouteStore {
    fn airport(&self, code: &str) -> Result<Option<Airport>, RouteGraphError>;

    /// Full route set. Callers must not rely on any particular order.
    fn routes(&self) -> Result<Vec<Route>, RouteGraphError>;

    fn airports(&self) -> Result<Vec<Airport>, RouteGraphError>;

    fn route_from(
        &self,
        code: &str,
        position: Position,
    ) -> Result<Option<Route>, RouteGraphError> {
        Ok(self
            .routes()?
            .into_iter()
            .find(|route| route.from == code && route.position == position))
    }

    fn routes_from(&self, code: &str) -> Result<Vec<Route>, RouteGraphError> {
        let mut routes: Vec<Route> = self
            .routes()?
            .into_iter()
            .filter(|route| route.from == code)
            .collect();
        routes.sort_by_key(|route| route.position);
        Ok(routes)
    }
}

impl RouteStore for RouteGraph {
    fn airport(&self, code: &str) -> Result<Option<Airport>, RouteGraphError> {
        self.get_airport(code)
    }

    fn routes(&self) -> Result<Vec<Route>, RouteGraphError> {
        RouteGraph::routes(self)
    }

    fn airports(&self) -> Result<Vec<Airport>, RouteGraphError> {
        RouteGraph::airports(self)
    }

    fn route_from(
        &self,
        code: &str,
        position: Position,
    ) -> Result<Option<Route>, RouteGraphError> {
        self.get_route(code, position)
    }

    fn routes_from(&self, code: &str) -> Result<Vec<Route>, RouteGraphError> {
        RouteGraph::routes_from(self, code)
    }
}

impl<'a, S> RouteStore for &'a S
where
    S: RouteStore + ?Sized,
{
    fn airport(&self, code: &str) -> Result<Option<Airport>, RouteGraphError> {
        (*self).airport(code)
    }

    fn routes(&self) -> Result<Vec<Route>, RouteGraphError> {
        (*self).routes()
    }

    fn airports(&self) -> Result<Vec<Airport>, RouteGraphError> {
        (*self).airports()
    }

    fn route_from(
        &self,
        code: &str,
        position: Position,
    ) -> Result<Option<Route>, RouteGraphError> {
        (*self).route_from(code, position)
    }

    fn routes_from(&self, code: &str) -> Result<Vec<Route>, RouteGraphError> {
        (*self).routes_from(code)
    }
}
