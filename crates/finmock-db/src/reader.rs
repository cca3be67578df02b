//! Read-side queries for verification and reporting.

use turso::Connection;

use crate::config::DatabaseConfig;
use crate::error::{DatabaseError, Result};
use crate::schema;

/// Read-only queries over a loaded database.
pub struct DatabaseReader {
    conn: Connection,
}

impl DatabaseReader {
    /// Create a reader over an existing connection.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Create a reader from configuration.
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self> {
        let db = turso::Builder::new_local(&config.path)
            .build()
            .await
            .map_err(|e| {
                DatabaseError::connection_with_source(
                    format!("Failed to open database: {}", config.path),
                    e,
                )
            })?;
        let conn = db.connect().map_err(|e| {
            DatabaseError::connection_with_source("Failed to establish database connection", e)
        })?;
        Ok(Self::new(conn))
    }

    /// Row count of one destination table.
    pub async fn table_count(&self, table: &str) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {table}");
        let mut rows = self
            .conn
            .query(&sql, ())
            .await
            .map_err(|e| DatabaseError::query(sql.clone(), e))?;
        match rows.next().await.map_err(|e| DatabaseError::query(sql, e))? {
            Some(row) => Ok(row.get(0)?),
            None => Ok(0),
        }
    }

    /// Row counts for every destination table, in schema order.
    pub async fn table_counts(&self) -> Result<Vec<(String, i64)>> {
        let mut counts = Vec::with_capacity(schema::TABLE_NAMES.len());
        for table in schema::TABLE_NAMES {
            counts.push((table.to_string(), self.table_count(table).await?));
        }
        Ok(counts)
    }
}
