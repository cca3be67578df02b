//! Error types for fixture loading and database operations.

use thiserror::Error;

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, DatabaseError>;

/// Database and fixture-loading error types.
///
/// Every variant is fatal to the run: there is no retry policy and no
/// partial-success reporting.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Connection-related errors.
    #[error("Database connection failed: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Statement execution errors, including constraint violations.
    #[error("Query execution failed: {query}")]
    Query {
        query: String,
        #[source]
        source: turso::Error,
    },

    /// Schema creation errors.
    #[error("Schema error: {message}")]
    Schema {
        message: String,
        #[source]
        source: turso::Error,
    },

    /// Transaction control errors.
    #[error("Transaction error: {message}")]
    Transaction {
        message: String,
        #[source]
        source: turso::Error,
    },

    /// Fixture file I/O errors.
    #[error("Fixture error: {path}")]
    Fixture {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed or incomplete fixture documents, including missing
    /// expected sections.
    #[error("Fixture parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Generic database errors.
    #[error("Database error: {message}")]
    Generic {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl DatabaseError {
    /// Create a new connection error.
    pub fn connection<S: Into<String>>(message: S) -> Self {
        Self::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new connection error with source.
    pub fn connection_with_source<
        S: Into<String>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Connection {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(query: S, source: turso::Error) -> Self {
        Self::Query {
            query: query.into(),
            source,
        }
    }

    /// Create a new schema error.
    pub fn schema<S: Into<String>>(message: S, source: turso::Error) -> Self {
        Self::Schema {
            message: message.into(),
            source,
        }
    }

    /// Create a new transaction error.
    pub fn transaction<S: Into<String>>(message: S, source: turso::Error) -> Self {
        Self::Transaction {
            message: message.into(),
            source,
        }
    }

    /// Create a new fixture error.
    pub fn fixture<P: Into<String>>(path: P, source: std::io::Error) -> Self {
        Self::Fixture {
            path: path.into(),
            source,
        }
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(message: S, source: serde_json::Error) -> Self {
        Self::Parse {
            message: message.into(),
            source,
        }
    }
}

impl From<turso::Error> for DatabaseError {
    fn from(err: turso::Error) -> Self {
        Self::Generic {
            message: "Turso database error".to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<std::io::Error> for DatabaseError {
    fn from(err: std::io::Error) -> Self {
        Self::Fixture {
            path: "unknown".to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for DatabaseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            message: "JSON deserialization failed".to_string(),
            source: err,
        }
    }
}
