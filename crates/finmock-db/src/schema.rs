//! Destination table definitions.
//!
//! Ten tables with explicit primary keys: natural keys for dimension
//! tables, generated ids for fact and customer tables. `fx_rates` carries
//! no primary key; its rows are never conflict-skipped.

use tracing::info;
use turso::Connection;

use crate::error::{DatabaseError, Result};

/// DDL for every destination table, executed in order.
pub const TABLES: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS salesforce_customers (
        id TEXT PRIMARY KEY,
        is_deleted INTEGER,
        account_number INTEGER,
        name TEXT,
        billing_country TEXT,
        capacity_s INTEGER,
        capacity_m INTEGER,
        capacity_l INTEGER
    )",
    "CREATE TABLE IF NOT EXISTS business_central_global_customers (
        id TEXT PRIMARY KEY,
        account_number INTEGER,
        currency TEXT,
        country_code TEXT
    )",
    "CREATE TABLE IF NOT EXISTS ledger (
        id TEXT PRIMARY KEY,
        journal_id TEXT,
        account_number INTEGER,
        account_code TEXT,
        date TEXT,
        currency TEXT,
        amount REAL,
        entity_code TEXT,
        territory TEXT,
        business_unit TEXT,
        consolidation_group TEXT,
        is_adjustment_entry INTEGER,
        is_manual INTEGER
    )",
    "CREATE TABLE IF NOT EXISTS fx_rates (
        month TEXT,
        currency TEXT,
        rate_to_eur REAL
    )",
    "CREATE TABLE IF NOT EXISTS journal_entries (
        journal_id TEXT PRIMARY KEY,
        source_system TEXT,
        posted_by TEXT,
        status TEXT,
        posted_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS accounts (
        account_code TEXT PRIMARY KEY,
        account_name TEXT,
        account_type TEXT,
        reporting_group TEXT,
        is_pl_account INTEGER
    )",
    "CREATE TABLE IF NOT EXISTS entity_codes (
        entity_code TEXT PRIMARY KEY,
        description TEXT,
        created_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS territories (
        territory TEXT PRIMARY KEY,
        description TEXT,
        region TEXT,
        country_group TEXT
    )",
    "CREATE TABLE IF NOT EXISTS business_units (
        business_unit TEXT PRIMARY KEY,
        description TEXT,
        unit_type TEXT,
        manager TEXT
    )",
    "CREATE TABLE IF NOT EXISTS consolidation_groups (
        consolidation_group TEXT PRIMARY KEY,
        description TEXT,
        group_type TEXT,
        lead_entity TEXT
    )",
];

/// Destination table names, in schema order.
pub const TABLE_NAMES: &[&str] = &[
    "salesforce_customers",
    "business_central_global_customers",
    "ledger",
    "fx_rates",
    "journal_entries",
    "accounts",
    "entity_codes",
    "territories",
    "business_units",
    "consolidation_groups",
];

/// Create all destination tables if they do not already exist.
pub async fn create_tables(conn: &Connection) -> Result<()> {
    info!("[DB] Initializing database schema");
    for table in TABLES {
        conn.execute(table, ())
            .await
            .map_err(|e| DatabaseError::schema("Failed to create table", e))?;
    }
    info!("[DB] Database schema initialized");
    Ok(())
}
