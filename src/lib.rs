//! Directional airport route graph on SQLite.
//!
//! Each airport has at most one `left` and one `right` outgoing route. Three
//! queries run over any [`store::RouteStore`]: an n-step walk along one
//! position, the heaviest single hop, and the weighted shortest path.
//! Run Criterion benchmarks with `cargo bench` to inspect reports under `target/criterion`.

pub mod bench_utils;
pub mod cli;
pub mod client;
pub mod dijkstra;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod longest;
pub mod memory;
pub mod query;
pub mod safety;
pub mod schema;
pub mod seed;
pub mod snapshot;
pub mod store;
pub mod walk;

pub use crate::errors::RouteGraphError;
pub use crate::graph::{Airport, Position, Route, RouteGraph, RoutePath};
pub use crate::memory::MemoryRouteStore;
pub use crate::query::RouteQuery;
pub use crate::safety::{IntegrityReport, check_integrity};
pub use crate::snapshot::GraphSnapshot;
pub use crate::store::RouteStore;
