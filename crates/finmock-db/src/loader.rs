//! Idempotent fixture loading.
//!
//! Every table loads under an insert-if-absent contract keyed on its
//! primary key: a row that already exists is never modified by a later
//! load. All tables load inside one transaction, committed only after the
//! last table has been processed.

use std::path::Path;

use finmock_types::{
    AccountDimension, BusinessUnitDim, ConsolidationGroupDim, EntityCodeDim, FxRate,
    GlobalCustomer, JournalEntry, LedgerLine, MockDataset, SalesforceCustomer, TerritoryDim,
};
use serde::Serialize;
use tokio::fs;
use tracing::{debug, info};
use turso::{Builder, Connection, Value};

use crate::config::DatabaseConfig;
use crate::error::{DatabaseError, Result};
use crate::schema;

/// Loader owning the run's single connection.
pub struct DatasetLoader {
    pub conn: Connection,
    pub config: DatabaseConfig,
}

/// Row counts for one destination table.
#[derive(Debug, Clone, Serialize)]
pub struct TableLoad {
    pub table: String,
    pub attempted: usize,
    pub inserted: usize,
    pub skipped_null: usize,
}

/// Summary of a completed load.
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub tables: Vec<TableLoad>,
    pub duration_ms: u64,
}

impl LoadReport {
    /// Total rows actually inserted across all tables.
    pub fn inserted(&self) -> usize {
        self.tables.iter().map(|t| t.inserted).sum()
    }
}

impl DatasetLoader {
    /// Connect to the configured database and initialize the schema.
    pub async fn new(config: DatabaseConfig) -> Result<Self> {
        info!("[DB] Connecting to {}: {}", config.database_type(), config.path);
        let db = Builder::new_local(&config.path).build().await.map_err(|e| {
            DatabaseError::connection_with_source(
                format!("Failed to open database: {}", config.path),
                e,
            )
        })?;
        let conn = db.connect().map_err(|e| {
            DatabaseError::connection_with_source("Failed to establish database connection", e)
        })?;
        schema::create_tables(&conn).await?;
        Ok(Self { conn, config })
    }

    /// Read the fixture document from `path` and load every table.
    ///
    /// A missing file or a document missing any expected section is fatal
    /// and surfaces immediately.
    pub async fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<LoadReport> {
        let path = path.as_ref();
        info!("[DB] Loading fixture from {}", path.display());
        let raw = fs::read_to_string(path)
            .await
            .map_err(|e| DatabaseError::fixture(path.display().to_string(), e))?;
        let dataset: MockDataset = serde_json::from_str(&raw).map_err(|e| {
            DatabaseError::parse(format!("Malformed fixture document: {}", path.display()), e)
        })?;
        self.load_dataset(&dataset).await
    }

    /// Load a dataset inside a single transaction.
    pub async fn load_dataset(&self, dataset: &MockDataset) -> Result<LoadReport> {
        let start = std::time::Instant::now();
        self.conn
            .execute("BEGIN", ())
            .await
            .map_err(|e| DatabaseError::transaction("Failed to begin transaction", e))?;

        match self.load_all_tables(dataset).await {
            Ok(tables) => {
                self.conn
                    .execute("COMMIT", ())
                    .await
                    .map_err(|e| DatabaseError::transaction("Failed to commit transaction", e))?;
                let report = LoadReport {
                    tables,
                    duration_ms: start.elapsed().as_millis() as u64,
                };
                info!(
                    "[DB] Load committed: {} rows inserted in {}ms",
                    report.inserted(),
                    report.duration_ms
                );
                Ok(report)
            }
            Err(e) => {
                // Roll back so a failed load leaves no partial rows.
                let _ = self.conn.execute("ROLLBACK", ()).await;
                Err(e)
            }
        }
    }

    async fn load_all_tables(&self, dataset: &MockDataset) -> Result<Vec<TableLoad>> {
        let mut tables = Vec::with_capacity(schema::TABLE_NAMES.len());

        tables.push(
            self.insert_rows(
                "salesforce_customers",
                &[
                    "id",
                    "is_deleted",
                    "account_number",
                    "name",
                    "billing_country",
                    "capacity_s",
                    "capacity_m",
                    "capacity_l",
                ],
                dataset.salesforce.customers.iter().map(salesforce_values).collect(),
            )
            .await?,
        );

        tables.push(
            self.insert_rows(
                "business_central_global_customers",
                &["id", "account_number", "currency", "country_code"],
                dataset
                    .business_central
                    .global_customers
                    .iter()
                    .map(global_customer_values)
                    .collect(),
            )
            .await?,
        );

        tables.push(
            self.insert_rows(
                "ledger",
                &[
                    "id",
                    "journal_id",
                    "account_number",
                    "account_code",
                    "date",
                    "currency",
                    "amount",
                    "entity_code",
                    "territory",
                    "business_unit",
                    "consolidation_group",
                    "is_adjustment_entry",
                    "is_manual",
                ],
                dataset.ledger.lines.iter().map(ledger_values).collect(),
            )
            .await?,
        );

        tables.push(
            self.insert_rows(
                "fx_rates",
                &["month", "currency", "rate_to_eur"],
                dataset.fx_rates.rates.iter().map(fx_values).collect(),
            )
            .await?,
        );

        tables.push(
            self.insert_rows(
                "journal_entries",
                &["journal_id", "source_system", "posted_by", "status", "posted_at"],
                dataset.journal_entries.entries.iter().map(journal_values).collect(),
            )
            .await?,
        );

        tables.push(
            self.insert_rows(
                "accounts",
                &[
                    "account_code",
                    "account_name",
                    "account_type",
                    "reporting_group",
                    "is_pl_account",
                ],
                dataset.accounts.dimension.iter().map(account_values).collect(),
            )
            .await?,
        );

        tables.push(
            self.insert_rows(
                "entity_codes",
                &["entity_code", "description", "created_at"],
                dataset.entity_codes.iter().map(entity_code_values).collect(),
            )
            .await?,
        );

        tables.push(
            self.insert_rows(
                "territories",
                &["territory", "description", "region", "country_group"],
                dataset.territories.iter().map(territory_values).collect(),
            )
            .await?,
        );

        tables.push(
            self.insert_rows(
                "business_units",
                &["business_unit", "description", "unit_type", "manager"],
                dataset.business_units.iter().map(business_unit_values).collect(),
            )
            .await?,
        );

        tables.push(
            self.insert_rows(
                "consolidation_groups",
                &["consolidation_group", "description", "group_type", "lead_entity"],
                dataset
                    .consolidation_groups
                    .iter()
                    .map(consolidation_group_values)
                    .collect(),
            )
            .await?,
        );

        Ok(tables)
    }

    /// Insert rows with the insert-if-absent contract. Rows whose every
    /// bound value is NULL are skipped before execution.
    async fn insert_rows(
        &self,
        table: &str,
        columns: &[&str],
        rows: Vec<Vec<Value>>,
    ) -> Result<TableLoad> {
        let placeholders = vec!["?"; columns.len()].join(", ");
        let sql = format!(
            "INSERT OR IGNORE INTO {} ({}) VALUES ({})",
            table,
            columns.join(", "),
            placeholders
        );

        let mut load = TableLoad {
            table: table.to_string(),
            attempted: rows.len(),
            inserted: 0,
            skipped_null: 0,
        };
        for values in rows {
            if is_all_null(&values) {
                load.skipped_null += 1;
                continue;
            }
            let changed = self
                .conn
                .execute(&sql, turso::params_from_iter(values))
                .await
                .map_err(|e| DatabaseError::query(sql.clone(), e))?;
            load.inserted += changed as usize;
        }
        debug!(
            "[DB] {}: {} attempted, {} inserted, {} null rows skipped",
            load.table, load.attempted, load.inserted, load.skipped_null
        );
        Ok(load)
    }
}

/// True when every bound value is NULL (a degenerate empty record).
fn is_all_null(values: &[Value]) -> bool {
    !values.is_empty() && values.iter().all(|v| matches!(v, Value::Null))
}

// Row-to-parameter bindings. Booleans bind as integers, dates as ISO text.

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn opt_text(s: &Option<String>) -> Value {
    match s {
        Some(s) => text(s),
        None => Value::Null,
    }
}

fn integer(i: i64) -> Value {
    Value::Integer(i)
}

fn opt_integer(i: &Option<i64>) -> Value {
    match i {
        Some(i) => Value::Integer(*i),
        None => Value::Null,
    }
}

fn boolean(b: bool) -> Value {
    Value::Integer(b as i64)
}

fn real(f: f64) -> Value {
    Value::Real(f)
}

fn salesforce_values(c: &SalesforceCustomer) -> Vec<Value> {
    vec![
        text(&c.id),
        boolean(c.is_deleted),
        integer(c.account_number),
        opt_text(&c.name),
        opt_text(&c.billing_country),
        opt_integer(&c.capacity_s),
        opt_integer(&c.capacity_m),
        opt_integer(&c.capacity_l),
    ]
}

fn global_customer_values(c: &GlobalCustomer) -> Vec<Value> {
    vec![
        text(&c.id),
        integer(c.account_number),
        text(&c.currency),
        text(&c.country_code),
    ]
}

fn ledger_values(l: &LedgerLine) -> Vec<Value> {
    vec![
        text(&l.id),
        text(&l.journal_id),
        integer(l.account_number),
        text(&l.account_code),
        text(&l.date.to_string()),
        text(&l.currency),
        real(l.amount),
        text(&l.entity_code),
        text(&l.territory),
        text(&l.business_unit),
        text(&l.consolidation_group),
        boolean(l.is_adjustment_entry),
        boolean(l.is_manual),
    ]
}

fn fx_values(r: &FxRate) -> Vec<Value> {
    vec![text(&r.month), text(&r.currency), real(r.rate_to_eur)]
}

fn journal_values(e: &JournalEntry) -> Vec<Value> {
    vec![
        text(&e.journal_id),
        text(&e.source_system),
        text(&e.posted_by),
        text(e.status.as_str()),
        text(&e.posted_at),
    ]
}

fn account_values(a: &AccountDimension) -> Vec<Value> {
    vec![
        text(&a.account_code),
        text(&a.account_name),
        text(&a.account_type),
        text(&a.reporting_group),
        boolean(a.is_pl_account),
    ]
}

fn entity_code_values(d: &EntityCodeDim) -> Vec<Value> {
    vec![
        text(&d.entity_code),
        text(&d.description),
        text(&d.created_at.to_string()),
    ]
}

fn territory_values(d: &TerritoryDim) -> Vec<Value> {
    vec![
        text(&d.territory),
        text(&d.description),
        text(&d.region),
        text(&d.country_group),
    ]
}

fn business_unit_values(d: &BusinessUnitDim) -> Vec<Value> {
    vec![
        text(&d.business_unit),
        text(&d.description),
        text(&d.unit_type),
        text(&d.manager),
    ]
}

fn consolidation_group_values(d: &ConsolidationGroupDim) -> Vec<Value> {
    vec![
        text(&d.consolidation_group),
        text(&d.description),
        text(&d.group_type),
        text(&d.lead_entity),
    ]
}
