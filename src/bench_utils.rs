//! Deterministic synthetic route networks for benchmarks and load tests.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    errors::RouteGraphError,
    graph::{Airport, Position, Route, RouteGraph},
    snapshot::GraphSnapshot,
};

const MAX_DURATION: u32 = 1_000;

#[derive(Clone, Debug)]
pub struct RouteDataset {
    pub airports: Vec<Airport>,
    pub routes: Vec<Route>,
}

impl RouteDataset {
    pub fn airports(&self) -> usize {
        self.airports.len()
    }

    pub fn routes(&self) -> usize {
        self.routes.len()
    }

    pub fn code(&self, idx: usize) -> &str {
        &self.airports[idx].code
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot::from_parts(self.airports.clone(), self.routes.clone())
    }

    pub fn load_into(&self, graph: &RouteGraph) -> Result<(), RouteGraphError> {
        for airport in &self.airports {
            graph.insert_airport(airport)?;
        }
        for route in &self.routes {
            graph.insert_route(route)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub enum NetworkShape {
    /// `i -> i + 1` on the left slot only.
    Chain,
    /// Heap layout: `i -> 2i + 1` left, `i -> 2i + 2` right.
    BinaryTree,
    /// Every slot is filled with probability `fill`, pointing at a random
    /// other airport.
    Random { fill: f64 },
}

pub fn generate_network(shape: NetworkShape, airport_count: usize, seed: u64) -> RouteDataset {
    assert!(airport_count > 1, "airport_count must exceed 1");
    let mut rng = StdRng::seed_from_u64(seed);
    let airports = build_airports(airport_count);
    let mut routes = match shape {
        NetworkShape::Chain => generate_chain(airport_count, &mut rng),
        NetworkShape::BinaryTree => generate_tree(airport_count, &mut rng),
        NetworkShape::Random { fill } => generate_random(airport_count, fill, &mut rng),
    };
    routes.sort_by(|a, b| a.from.cmp(&b.from).then(a.position.cmp(&b.position)));
    RouteDataset { airports, routes }
}

fn build_airports(count: usize) -> Vec<Airport> {
    (0..count)
        .map(|idx| Airport::new(code_for(idx), format!("Airport {idx}")))
        .collect()
}

fn generate_chain(count: usize, rng: &mut StdRng) -> Vec<Route> {
    (0..count - 1)
        .map(|idx| new_route(idx, idx + 1, Position::Left, rng))
        .collect()
}

fn generate_tree(count: usize, rng: &mut StdRng) -> Vec<Route> {
    let mut routes = Vec::with_capacity(count);
    for idx in 0..count {
        for (offset, position) in [(1, Position::Left), (2, Position::Right)] {
            let child = 2 * idx + offset;
            if child < count {
                routes.push(new_route(idx, child, position, rng));
            }
        }
    }
    routes
}

fn generate_random(count: usize, fill: f64, rng: &mut StdRng) -> Vec<Route> {
    assert!((0.0..=1.0).contains(&fill), "fill must be within 0..=1");
    let mut routes = Vec::new();
    for idx in 0..count {
        for position in Position::ALL {
            if !rng.gen_bool(fill) {
                continue;
            }
            let mut target = rng.gen_range(0..count - 1);
            if target >= idx {
                target += 1;
            }
            routes.push(new_route(idx, target, position, rng));
        }
    }
    routes
}

fn new_route(from: usize, to: usize, position: Position, rng: &mut StdRng) -> Route {
    Route::new(
        code_for(from),
        code_for(to),
        position,
        rng.gen_range(1..=MAX_DURATION),
    )
}

/// Fixed-width codes so lexical order matches index order.
fn code_for(idx: usize) -> String {
    format!("N{idx:07}")
}
