use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use crate::{errors::RouteGraphError, schema::ensure_schema};

use super::types::{
    Airport, Position, Route, row_to_airport, row_to_route, validate_airport, validate_route,
};

const ROUTE_COLUMNS: &str = "SELECT src.code, dst.code, r.position, r.duration FROM routes r \
     JOIN airports src ON src.id = r.from_id \
     JOIN airports dst ON dst.id = r.to_id";

/// Durable airport/route store on top of a single SQLite connection.
pub struct RouteGraph {
    conn: Connection,
}

impl RouteGraph {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RouteGraphError> {
        let conn =
            Connection::open(path).map_err(|e| RouteGraphError::connection(e.to_string()))?;
        ensure_schema(&conn)?;
        Ok(Self::from_connection(conn))
    }

    pub fn open_in_memory() -> Result<Self, RouteGraphError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| RouteGraphError::connection(e.to_string()))?;
        ensure_schema(&conn)?;
        Ok(Self::from_connection(conn))
    }

    pub fn insert_airport(&self, airport: &Airport) -> Result<(), RouteGraphError> {
        validate_airport(airport)?;
        if self.airport_id(&airport.code)?.is_some() {
            return Err(RouteGraphError::invalid_input(format!(
                "airport {} already exists",
                airport.code
            )));
        }
        self.conn
            .execute(
                "INSERT INTO airports(code, name) VALUES(?1, ?2)",
                params![airport.code.as_str(), airport.name.as_str()],
            )
            .map_err(|e| RouteGraphError::query(e.to_string()))?;
        Ok(())
    }

    /// Get-or-create by code. Returns `true` when a new row was written; an
    /// existing airport keeps its name.
    pub fn upsert_airport(&self, airport: &Airport) -> Result<bool, RouteGraphError> {
        validate_airport(airport)?;
        let affected = self
            .conn
            .execute(
                "INSERT INTO airports(code, name) VALUES(?1, ?2) ON CONFLICT(code) DO NOTHING",
                params![airport.code.as_str(), airport.name.as_str()],
            )
            .map_err(|e| RouteGraphError::query(e.to_string()))?;
        Ok(affected == 1)
    }

    pub fn get_airport(&self, code: &str) -> Result<Option<Airport>, RouteGraphError> {
        self.conn
            .query_row(
                "SELECT code, name FROM airports WHERE code=?1",
                params![code],
                row_to_airport,
            )
            .optional()
            .map_err(|e| RouteGraphError::query(e.to_string()))
    }

    pub fn airports(&self) -> Result<Vec<Airport>, RouteGraphError> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT code, name FROM airports ORDER BY code")
            .map_err(|e| RouteGraphError::query(e.to_string()))?;
        let rows = stmt
            .query_map([], row_to_airport)
            .map_err(|e| RouteGraphError::query(e.to_string()))?;
        let mut airports = Vec::new();
        for row in rows {
            airports.push(row.map_err(|e| RouteGraphError::query(e.to_string()))?);
        }
        Ok(airports)
    }

    /// Deletes an airport together with every route touching it.
    pub fn delete_airport(&self, code: &str) -> Result<(), RouteGraphError> {
        let affected = self
            .conn
            .execute("DELETE FROM airports WHERE code=?1", params![code])
            .map_err(|e| RouteGraphError::query(e.to_string()))?;
        if affected == 0 {
            return Err(RouteGraphError::not_found(format!("airport {code}")));
        }
        Ok(())
    }

    /// Adds a route, refusing to overwrite an occupied `(from, position)` slot.
    pub fn insert_route(&self, route: &Route) -> Result<(), RouteGraphError> {
        validate_route(route)?;
        let (from_id, to_id) = self.endpoint_ids(route)?;
        if self.get_route(&route.from, route.position)?.is_some() {
            return Err(RouteGraphError::invalid_input(format!(
                "airport {} already has a {} route",
                route.from, route.position
            )));
        }
        self.conn
            .execute(
                "INSERT INTO routes(from_id, to_id, position, duration) VALUES(?1, ?2, ?3, ?4)",
                params![from_id, to_id, route.position.as_str(), route.duration],
            )
            .map_err(|e| RouteGraphError::query(e.to_string()))?;
        Ok(())
    }

    /// Insert-or-replace keyed by `(from, position)`.
    pub fn upsert_route(&self, route: &Route) -> Result<(), RouteGraphError> {
        validate_route(route)?;
        let (from_id, to_id) = self.endpoint_ids(route)?;
        self.conn
            .execute(
                "INSERT INTO routes(from_id, to_id, position, duration) VALUES(?1, ?2, ?3, ?4) \
                 ON CONFLICT(from_id, position) \
                 DO UPDATE SET to_id=excluded.to_id, duration=excluded.duration",
                params![from_id, to_id, route.position.as_str(), route.duration],
            )
            .map_err(|e| RouteGraphError::query(e.to_string()))?;
        Ok(())
    }

    pub fn get_route(
        &self,
        from: &str,
        position: Position,
    ) -> Result<Option<Route>, RouteGraphError> {
        self.conn
            .query_row(
                &format!("{ROUTE_COLUMNS} WHERE src.code=?1 AND r.position=?2"),
                params![from, position.as_str()],
                row_to_route,
            )
            .optional()
            .map_err(|e| RouteGraphError::query(e.to_string()))
    }

    pub fn routes_from(&self, from: &str) -> Result<Vec<Route>, RouteGraphError> {
        self.collect_routes(
            &format!("{ROUTE_COLUMNS} WHERE src.code=?1 ORDER BY r.position"),
            Some(from),
        )
    }

    /// Every route, ordered by source code then position (left first).
    pub fn routes(&self) -> Result<Vec<Route>, RouteGraphError> {
        self.collect_routes(&format!("{ROUTE_COLUMNS} ORDER BY src.code, r.position"), None)
    }

    pub fn delete_route(&self, from: &str, position: Position) -> Result<(), RouteGraphError> {
        let affected = self
            .conn
            .execute(
                "DELETE FROM routes WHERE position=?2 \
                 AND from_id=(SELECT id FROM airports WHERE code=?1)",
                params![from, position.as_str()],
            )
            .map_err(|e| RouteGraphError::query(e.to_string()))?;
        if affected == 0 {
            return Err(RouteGraphError::not_found(format!(
                "{position} route from {from}"
            )));
        }
        Ok(())
    }

    pub fn airport_count(&self) -> Result<usize, RouteGraphError> {
        self.count("SELECT COUNT(*) FROM airports")
    }

    pub fn route_count(&self) -> Result<usize, RouteGraphError> {
        self.count("SELECT COUNT(*) FROM routes")
    }
}

impl RouteGraph {
    fn endpoint_ids(&self, route: &Route) -> Result<(i64, i64), RouteGraphError> {
        match (self.airport_id(&route.from)?, self.airport_id(&route.to)?) {
            (Some(from_id), Some(to_id)) => Ok((from_id, to_id)),
            _ => Err(RouteGraphError::invalid_input(
                "route endpoints must reference existing airports",
            )),
        }
    }

    fn airport_id(&self, code: &str) -> Result<Option<i64>, RouteGraphError> {
        self.conn
            .query_row(
                "SELECT id FROM airports WHERE code=?1",
                params![code],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| RouteGraphError::query(e.to_string()))
    }

    fn collect_routes(
        &self,
        sql: &str,
        from: Option<&str>,
    ) -> Result<Vec<Route>, RouteGraphError> {
        let mut stmt = self
            .conn
            .prepare_cached(sql)
            .map_err(|e| RouteGraphError::query(e.to_string()))?;
        let rows = match from {
            Some(code) => stmt.query_map(params![code], row_to_route),
            None => stmt.query_map([], row_to_route),
        }
        .map_err(|e| RouteGraphError::query(e.to_string()))?;
        let mut routes = Vec::new();
        for row in rows {
            routes.push(row.map_err(|e| RouteGraphError::query(e.to_string()))?);
        }
        Ok(routes)
    }

    fn count(&self, sql: &str) -> Result<usize, RouteGraphError> {
        let count: i64 = self
            .conn
            .query_row(sql, [], |row| row.get(0))
            .map_err(|e| RouteGraphError::query(e.to_string()))?;
        Ok(count as usize)
    }

    fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }
}
