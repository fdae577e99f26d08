use crate::{
    errors::RouteGraphError,
    graph::{Airport, Position, Route},
    store::RouteStore,
};

/// Destination of the heaviest route leaving `start`.
///
/// Returns `Ok(None)` when `start` is unknown or has no outgoing routes. When
/// both routes weigh the same, the left one wins.
pub fn longest_node<S: RouteStore>(
    store: &S,
    start: &str,
) -> Result<Option<Airport>, RouteGraphError> {
    if store.airport(start)?.is_none() {
        return Ok(None);
    }
    let routes = store.routes_from(start)?;
    match longest_route(&routes) {
        Some(route) => store.airport(&route.to),
        None => Ok(None),
    }
}

/// Picks the maximum-duration route, preferring `Left` on a tie.
pub fn longest_route(routes: &[Route]) -> Option<&Route> {
    routes.iter().fold(None, |best: Option<&Route>, route| match best {
        None => Some(route),
        Some(current) if route.duration > current.duration => Some(route),
        Some(current)
            if route.duration == current.duration
                && route.position == Position::Left
                && current.position != Position::Left =>
        {
            Some(route)
        }
        keep => keep,
    })
}
