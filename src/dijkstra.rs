//! Weighted shortest path over the full route set.
//!
//! The frontier is a `BinaryHeap` without decrease-key: an improved distance is
//! pushed as a fresh entry and the outdated one is dropped when it surfaces.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ahash::AHashMap;
use tracing::{debug, trace};

use crate::{
    errors::RouteGraphError,
    graph::{Position, Route, RoutePath},
    store::RouteStore,
};

/// Cheapest route sequence from `from` to `to`.
///
/// Returns `Ok(None)` when either airport is unknown or `to` cannot be
/// reached. A path from an airport to itself has distance 0 and no routes.
pub fn shortest_path<S: RouteStore>(
    store: &S,
    from: &str,
    to: &str,
) -> Result<Option<RoutePath>, RouteGraphError> {
    if store.airport(from)?.is_none() || store.airport(to)?.is_none() {
        return Ok(None);
    }
    let routes = store.routes()?;
    let network = Network::build(&routes);
    Ok(network.shortest_path(from, to))
}

/// Adjacency view built once per search.
///
/// Both `adjacency` and `edges` keep a single route per ordered airport pair:
/// the cheaper one, or the left one when two routes to the same destination
/// weigh the same. Neighbor lists are sorted by code so equal-cost paths
/// resolve the same way on every run.
pub struct Network<'a> {
    adjacency: AHashMap<&'a str, Vec<(&'a str, u64)>>,
    edges: AHashMap<(&'a str, &'a str), &'a Route>,
}

impl<'a> Network<'a> {
    pub fn build(routes: &'a [Route]) -> Self {
        let mut edges: AHashMap<(&'a str, &'a str), &'a Route> =
            AHashMap::with_capacity(routes.len());
        for route in routes {
            let key = (route.from.as_str(), route.to.as_str());
            let replace = edges
                .get(&key)
                .is_none_or(|existing| preferred_over(route, existing));
            if replace {
                edges.insert(key, route);
            }
        }

        let mut adjacency: AHashMap<&'a str, Vec<(&'a str, u64)>> = AHashMap::new();
        for (&(from, to), route) in &edges {
            adjacency
                .entry(from)
                .or_default()
                .push((to, u64::from(route.duration)));
        }
        for neighbors in adjacency.values_mut() {
            neighbors.sort_unstable_by(|a, b| a.0.cmp(b.0));
        }
        Self { adjacency, edges }
    }

    pub fn shortest_path(&self, from: &'a str, to: &'a str) -> Option<RoutePath> {
        let mut dist: AHashMap<&'a str, u64> = AHashMap::new();
        let mut prev: AHashMap<&'a str, &'a str> = AHashMap::new();
        let mut frontier = BinaryHeap::new();

        dist.insert(from, 0);
        frontier.push(FrontierEntry {
            cost: 0,
            code: from,
        });

        let mut settled = 0usize;
        while let Some(FrontierEntry { cost, code }) = frontier.pop() {
            if dist.get(code).is_some_and(|&best| cost > best) {
                trace!(code, cost, "discarding stale frontier entry");
                continue;
            }
            settled += 1;
            if code == to {
                break;
            }
            let Some(neighbors) = self.adjacency.get(code) else {
                continue;
            };
            for &(next, weight) in neighbors {
                let candidate = cost.saturating_add(weight);
                let improves = dist.get(next).is_none_or(|&known| candidate < known);
                if improves {
                    dist.insert(next, candidate);
                    prev.insert(next, code);
                    frontier.push(FrontierEntry {
                        cost: candidate,
                        code: next,
                    });
                }
            }
        }

        let Some(&distance) = dist.get(to) else {
            debug!(from, to, settled, "target unreachable");
            return None;
        };
        let path = reconstruct(&prev, from, to)?;
        let routes = path
            .windows(2)
            .map(|pair| self.edges.get(&(pair[0], pair[1])).map(|route| (*route).clone()))
            .collect::<Option<Vec<_>>>()?;
        debug!(from, to, distance, hops = routes.len(), settled, "shortest path found");
        Some(RoutePath {
            distance,
            path: path.into_iter().map(str::to_string).collect(),
            routes,
        })
    }
}

fn reconstruct<'a>(
    prev: &AHashMap<&'a str, &'a str>,
    from: &'a str,
    to: &'a str,
) -> Option<Vec<&'a str>> {
    let mut path = Vec::new();
    let mut current = to;
    while current != from {
        let &parent = prev.get(current)?;
        path.push(current);
        current = parent;
    }
    path.push(from);
    path.reverse();
    Some(path)
}

/// Cheaper wins; on equal weight a left route beats a right one.
fn preferred_over(candidate: &Route, existing: &Route) -> bool {
    candidate.duration < existing.duration
        || (candidate.duration == existing.duration
            && candidate.position == Position::Left
            && existing.position != Position::Left)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry<'a> {
    cost: u64,
    code: &'a str,
}

impl Ord for FrontierEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: BinaryHeap is a max-heap
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.code.cmp(self.code))
    }
}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
