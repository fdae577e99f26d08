use thiserror::Error;

/// Faults raised by the store or the mutation surface.
///
/// A query that simply has no answer (missing airport, broken walk,
/// unreachable target) is reported as `Ok(None)`, never through this type.
#[derive(Debug, Error)]
pub enum RouteGraphError {
    #[error("connection error: {0}")]
    ConnectionError(String),
    #[error("schema error: {0}")]
    SchemaError(String),
    #[error("query error: {0}")]
    QueryError(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl RouteGraphError {
    pub fn connection<T: Into<String>>(msg: T) -> Self {
        RouteGraphError::ConnectionError(msg.into())
    }

    pub fn schema<T: Into<String>>(msg: T) -> Self {
        RouteGraphError::SchemaError(msg.into())
    }

    pub fn query<T: Into<String>>(msg: T) -> Self {
        RouteGraphError::QueryError(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        RouteGraphError::NotFound(msg.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        RouteGraphError::InvalidInput(msg.into())
    }
}
