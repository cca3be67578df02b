//! Tests for idempotent dataset loading.

use chrono::{TimeZone, Utc};
use finmock_db::{DatabaseConfig, DatabaseReader, DatasetLoader};
use finmock_gen::{GeneratorConfig, MockGenerator};
use finmock_types::{
    AccountSection, BusinessCentralSection, FxRateSection, JournalEntry, JournalSection,
    JournalStatus, LedgerLine, LedgerSection, MockDataset, SalesforceSection,
};
use tempfile::TempDir;

fn sample_dataset() -> MockDataset {
    let config = GeneratorConfig::new()
        .with_account_range(10001, 10021)
        .with_journal_entries(5)
        .with_seed(4);
    let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
    MockGenerator::from_config(&config).build_dataset_at(&config, now)
}

fn empty_dataset() -> MockDataset {
    MockDataset {
        salesforce: SalesforceSection { customers: vec![] },
        business_central: BusinessCentralSection {
            global_customers: vec![],
        },
        ledger: LedgerSection { lines: vec![] },
        fx_rates: FxRateSection { rates: vec![] },
        journal_entries: JournalSection { entries: vec![] },
        accounts: AccountSection { dimension: vec![] },
        entity_codes: vec![],
        territories: vec![],
        business_units: vec![],
        consolidation_groups: vec![],
    }
}

#[tokio::test]
async fn load_populates_every_table() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test.db");
    let config = DatabaseConfig::new(db_path.to_string_lossy());

    let dataset = sample_dataset();
    let loader = DatasetLoader::new(config.clone()).await?;
    let report = loader.load_dataset(&dataset).await?;
    assert_eq!(report.inserted(), dataset.row_count());

    let reader = DatabaseReader::from_config(&config).await?;
    assert_eq!(
        reader.table_count("salesforce_customers").await?,
        dataset.salesforce.customers.len() as i64
    );
    assert_eq!(
        reader.table_count("ledger").await?,
        dataset.ledger.lines.len() as i64
    );
    assert_eq!(
        reader.table_count("fx_rates").await?,
        dataset.fx_rates.rates.len() as i64
    );
    assert_eq!(reader.table_count("accounts").await?, 5);

    Ok(())
}

#[tokio::test]
async fn reload_never_modifies_keyed_tables() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test.db");
    let config = DatabaseConfig::new(db_path.to_string_lossy());

    let dataset = sample_dataset();
    let loader = DatasetLoader::new(config.clone()).await?;
    loader.load_dataset(&dataset).await?;

    let reader = DatabaseReader::from_config(&config).await?;
    let first_counts = reader.table_counts().await?;

    let report = loader.load_dataset(&dataset).await?;
    let second_counts = reader.table_counts().await?;

    for ((table, first), (_, second)) in first_counts.iter().zip(&second_counts) {
        if table == "fx_rates" {
            // fx_rates has no primary key, so a reload appends its rows.
            assert_eq!(*second, first + dataset.fx_rates.rates.len() as i64);
        } else {
            assert_eq!(second, first, "{table} changed on reload");
        }
    }
    assert_eq!(
        report.inserted(),
        dataset.fx_rates.rates.len(),
        "only unkeyed fx rows may land on reload"
    );

    Ok(())
}

#[tokio::test]
async fn ledger_journal_references_load_cleanly() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config = DatabaseConfig::new(temp_dir.path().join("test.db").to_string_lossy());

    let mut dataset = empty_dataset();
    dataset.journal_entries.entries.push(JournalEntry {
        journal_id: "J1".to_string(),
        source_system: "BC".to_string(),
        posted_by: "system".to_string(),
        status: JournalStatus::Posted,
        posted_at: "2026-08-01 09:00:00".to_string(),
    });
    dataset.ledger.lines.push(LedgerLine {
        id: "L1".to_string(),
        journal_id: "J1".to_string(),
        account_number: 10001,
        account_code: "4000".to_string(),
        date: chrono::NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
        currency: "EUR".to_string(),
        amount: 150.0,
        entity_code: "ENT1".to_string(),
        territory: "CZ".to_string(),
        business_unit: "BU1".to_string(),
        consolidation_group: "GroupA".to_string(),
        is_adjustment_entry: false,
        is_manual: false,
    });

    let loader = DatasetLoader::new(config.clone()).await?;
    let report = loader.load_dataset(&dataset).await?;
    assert_eq!(report.inserted(), 2);

    let reader = DatabaseReader::from_config(&config).await?;
    assert_eq!(reader.table_count("ledger").await?, 1);
    assert_eq!(reader.table_count("journal_entries").await?, 1);

    Ok(())
}

#[tokio::test]
async fn missing_fixture_file_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config = DatabaseConfig::new(temp_dir.path().join("test.db").to_string_lossy());

    let loader = DatasetLoader::new(config).await?;
    let result = loader.load_file(temp_dir.path().join("missing.json")).await;
    assert!(result.is_err());

    Ok(())
}

#[tokio::test]
async fn missing_section_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let fixture = temp_dir.path().join("partial.json");
    tokio::fs::write(&fixture, r#"{"salesforce": {"customers": []}}"#).await?;

    let config = DatabaseConfig::new(temp_dir.path().join("test.db").to_string_lossy());
    let loader = DatasetLoader::new(config).await?;
    let err = loader.load_file(&fixture).await.unwrap_err();
    assert!(err.to_string().contains("Malformed fixture"));

    Ok(())
}

#[tokio::test]
async fn empty_dataset_loads_no_rows() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config = DatabaseConfig::new(temp_dir.path().join("test.db").to_string_lossy());

    let loader = DatasetLoader::new(config.clone()).await?;
    let report = loader.load_dataset(&empty_dataset()).await?;
    assert_eq!(report.inserted(), 0);

    let reader = DatabaseReader::from_config(&config).await?;
    for (table, count) in reader.table_counts().await? {
        assert_eq!(count, 0, "{table} should be empty");
    }

    Ok(())
}
