//! Entry points for the three route queries.
//!
//! Every method returns `Ok(None)` when there is no answer and `Err` only when
//! the underlying store fails.

use tracing::debug;

use crate::{
    dijkstra,
    errors::RouteGraphError,
    graph::{Airport, Position, RouteGraph, RoutePath},
    longest,
    store::RouteStore,
    walk,
};

pub struct RouteQuery<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S> RouteQuery<'a, S>
where
    S: RouteStore + ?Sized,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Airport reached after `steps` hops along `position` routes.
    pub fn nth_node(
        &self,
        start: &str,
        position: Position,
        steps: u32,
    ) -> Result<Option<Airport>, RouteGraphError> {
        let found = walk::nth_node(&self.store, start, position, steps)?;
        debug!(start, %position, steps, found = found.is_some(), "nth_node");
        Ok(found)
    }

    /// Destination of the heaviest route leaving `start`.
    pub fn longest_node(&self, start: &str) -> Result<Option<Airport>, RouteGraphError> {
        let found = longest::longest_node(&self.store, start)?;
        debug!(start, found = found.is_some(), "longest_node");
        Ok(found)
    }

    pub fn shortest_path(
        &self,
        from: &str,
        to: &str,
    ) -> Result<Option<RoutePath>, RouteGraphError> {
        let found = dijkstra::shortest_path(&self.store, from, to)?;
        debug!(from, to, found = found.is_some(), "shortest_path");
        Ok(found)
    }
}

impl RouteGraph {
    pub fn query(&self) -> RouteQuery<'_, Self> {
        RouteQuery::new(self)
    }
}
