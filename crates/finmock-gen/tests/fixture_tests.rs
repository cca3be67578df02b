//! Tests for fixture writing and the generate-or-skip guard.

use finmock_gen::{generate_to_path, GenerateOutcome, GeneratorConfig};
use finmock_types::MockDataset;
use tempfile::TempDir;

fn small_config() -> GeneratorConfig {
    GeneratorConfig::new()
        .with_account_range(10001, 10011)
        .with_journal_entries(3)
        .with_seed(8)
}

#[test]
fn generation_writes_a_parseable_fixture() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data").join("mock_data.json");

    let outcome = generate_to_path(&small_config(), &path).unwrap();
    assert_eq!(outcome, GenerateOutcome::Written);

    let raw = std::fs::read_to_string(&path).unwrap();
    let dataset: MockDataset = serde_json::from_str(&raw).unwrap();
    assert_eq!(dataset.salesforce.customers.len(), 10);
    assert_eq!(dataset.business_central.global_customers.len(), 10);
    assert_eq!(dataset.accounts.dimension.len(), 5);
}

#[test]
fn existing_fixture_is_never_overwritten() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mock_data.json");
    std::fs::write(&path, "{\"sentinel\": true}").unwrap();

    let outcome = generate_to_path(&small_config(), &path).unwrap();
    assert_eq!(outcome, GenerateOutcome::SkippedExisting);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "{\"sentinel\": true}"
    );
}

#[test]
fn fixture_carries_all_ten_sections() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mock_data.json");
    generate_to_path(&small_config(), &path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    assert_eq!(keys.len(), 10);
    for key in [
        "salesforce",
        "business_central",
        "ledger",
        "fx_rates",
        "journal_entries",
        "accounts",
        "entity_codes",
        "territories",
        "business_units",
        "consolidation_groups",
    ] {
        assert!(keys.contains(&key), "missing section {key}");
    }
}
