//! Database configuration.
//!
//! Connection parameters are fixed configuration values, not runtime
//! negotiated: a path (or URL) plus an optional auth token for remote
//! databases.

/// Configuration for database connections.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database path or URL.
    pub path: String,
    /// Authentication token for remote databases.
    pub auth_token: Option<String>,
}

impl DatabaseConfig {
    /// Create a new database configuration.
    pub fn new<P: Into<String>>(path: P) -> Self {
        Self {
            path: path.into(),
            auth_token: None,
        }
    }

    /// Resolve the path from `FINMOCK_DB_PATH`, falling back to
    /// `finmock.db`.
    pub fn from_env() -> Self {
        Self::new(std::env::var("FINMOCK_DB_PATH").unwrap_or_else(|_| "finmock.db".to_string()))
    }

    /// Set authentication token.
    pub fn with_auth_token(mut self, token: String) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Check if this is an in-memory database.
    pub fn is_memory(&self) -> bool {
        self.path == ":memory:" || self.path.contains("mode=memory")
    }

    /// Check if this is a remote database configuration.
    pub fn is_remote(&self) -> bool {
        self.path.starts_with("libsql://") || self.auth_token.is_some()
    }

    /// Get database type description.
    pub fn database_type(&self) -> &'static str {
        if self.is_memory() {
            "in-memory SQLite"
        } else if self.is_remote() {
            "remote SQLite"
        } else {
            "local SQLite"
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new("finmock.db")
    }
}
