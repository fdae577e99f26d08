//! Airport and route records plus the SQLite-backed store that holds them.

mod sqlite_graph;
mod types;

pub use sqlite_graph::RouteGraph;
pub use types::{
    Airport, MAX_CODE_LEN, MAX_NAME_LEN, Position, Route, RoutePath, validate_airport,
    validate_route,
};
