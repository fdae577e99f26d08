use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::RouteGraphError;

pub const MAX_CODE_LEN: usize = 10;
pub const MAX_NAME_LEN: usize = 100;

/// Which of an airport's two outgoing slots a route occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Left,
    Right,
}

impl Position {
    pub const ALL: [Position; 2] = [Position::Left, Position::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Left => "left",
            Position::Right => "right",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = RouteGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Position::Left),
            "right" => Ok(Position::Right),
            other => Err(RouteGraphError::invalid_input(format!(
                "position must be left or right, got {other:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Airport {
    pub code: String,
    pub name: String,
}

impl Airport {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code, self.name)
    }
}

/// A directed, weighted route. `(from, position)` identifies it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Route {
    pub from: String,
    pub to: String,
    pub position: Position,
    pub duration: u32,
}

impl Route {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        position: Position,
        duration: u32,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            position,
            duration,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({}, {} km)",
            self.from, self.to, self.position, self.duration
        )
    }
}

/// Result of a shortest-path search: total weight, the airport codes visited
/// in order, and the routes taken between consecutive codes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoutePath {
    pub distance: u64,
    pub path: Vec<String>,
    pub routes: Vec<Route>,
}

pub fn validate_airport(airport: &Airport) -> Result<(), RouteGraphError> {
    validate_code(&airport.code)?;
    if airport.name.trim().is_empty() {
        return Err(RouteGraphError::invalid_input("airport name must be set"));
    }
    if airport.name.chars().count() > MAX_NAME_LEN {
        return Err(RouteGraphError::invalid_input(format!(
            "airport name exceeds {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_route(route: &Route) -> Result<(), RouteGraphError> {
    validate_code(&route.from)?;
    validate_code(&route.to)?;
    if route.from == route.to {
        return Err(RouteGraphError::invalid_input(
            "from and to airports must be different",
        ));
    }
    Ok(())
}

fn validate_code(code: &str) -> Result<(), RouteGraphError> {
    if code.trim().is_empty() {
        return Err(RouteGraphError::invalid_input("airport code must be set"));
    }
    if code.chars().count() > MAX_CODE_LEN {
        return Err(RouteGraphError::invalid_input(format!(
            "airport code {code:?} exceeds {MAX_CODE_LEN} characters"
        )));
    }
    Ok(())
}

pub(crate) fn row_to_airport(row: &rusqlite::Row<'_>) -> Result<Airport, rusqlite::Error> {
    Ok(Airport {
        code: row.get(0)?,
        name: row.get(1)?,
    })
}

/// Expects `from_code, to_code, position, duration` columns.
pub(crate) fn row_to_route(row: &rusqlite::Row<'_>) -> Result<Route, rusqlite::Error> {
    let raw: String = row.get(2)?;
    let position = raw.parse::<Position>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(Route {
        from: row.get(0)?,
        to: row.get(1)?,
        position,
        duration: row.get(3)?,
    })
}
