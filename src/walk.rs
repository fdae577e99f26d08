use tracing::trace;

use crate::{
    errors::RouteGraphError,
    graph::{Airport, Position},
    store::RouteStore,
};

/// Follows the `position` route from `start` exactly `steps` times.
///
/// Returns `Ok(None)` when `start` is unknown or when any hop along the way
/// has no route in that position; the walk never skips a missing hop. Zero
/// steps yields the start airport itself.
pub fn nth_node<S: RouteStore>(
    store: &S,
    start: &str,
    position: Position,
    steps: u32,
) -> Result<Option<Airport>, RouteGraphError> {
    let Some(mut current) = store.airport(start)? else {
        return Ok(None);
    };
    for step in 1..=steps {
        let Some(route) = store.route_from(&current.code, position)? else {
            trace!(at = %current.code, step, %position, "walk ended early");
            return Ok(None);
        };
        match store.airport(&route.to)? {
            Some(next) => current = next,
            None => return Ok(None),
        }
    }
    Ok(Some(current))
}
