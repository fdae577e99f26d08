use rusqlite::Connection;

use crate::errors::RouteGraphError;

/// Creates the airport and route tables if they are missing.
///
/// The `routes` table carries the two structural invariants: no route may
/// leave and enter the same airport, and an airport owns at most one route per
/// position.
pub fn ensure_schema(conn: &Connection) -> Result<(), RouteGraphError> {
    conn.execute_batch(
        r#"
        PRAGMA foreign_keys = ON;
        CREATE TABLE IF NOT EXISTS airports (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            code      TEXT NOT NULL UNIQUE,
            name      TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS routes (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            from_id   INTEGER NOT NULL REFERENCES airports(id) ON DELETE CASCADE,
            to_id     INTEGER NOT NULL REFERENCES airports(id) ON DELETE CASCADE,
            position  TEXT NOT NULL CHECK (position IN ('left', 'right')),
            duration  INTEGER NOT NULL CHECK (duration >= 0),
            CHECK (from_id <> to_id),
            UNIQUE (from_id, position)
        );
        CREATE INDEX IF NOT EXISTS idx_routes_to ON routes(to_id);
        "#,
    )
    .map_err(|e| RouteGraphError::schema(e.to_string()))?;
    Ok(())
}
