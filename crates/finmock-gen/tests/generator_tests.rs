//! Tests for dataset generation invariants.

use std::collections::HashSet;

use chrono::{Datelike, TimeZone, Utc};
use finmock_gen::{GeneratorConfig, MockGenerator};
use finmock_types::{GlobalCustomer, MockDataset};

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
}

fn build(config: &GeneratorConfig) -> MockDataset {
    MockGenerator::from_config(config).build_dataset_at(config, fixed_now())
}

#[test]
fn crm_accounts_cover_the_range_exactly_once() {
    let config = GeneratorConfig::new().with_seed(7);
    let dataset = build(&config);

    let numbers: Vec<i64> = dataset
        .salesforce
        .customers
        .iter()
        .map(|c| c.account_number)
        .collect();
    assert_eq!(numbers.len(), config.account_count());
    let unique: HashSet<i64> = numbers.iter().copied().collect();
    assert_eq!(unique.len(), numbers.len());
    assert!(numbers
        .iter()
        .all(|n| (config.account_min..config.account_max).contains(n)));
}

#[test]
fn unmatched_global_accounts_stay_near_ten_percent() {
    let config = GeneratorConfig::new().with_seed(11);
    let dataset = build(&config);

    let crm: HashSet<i64> = dataset
        .salesforce
        .customers
        .iter()
        .map(|c| c.account_number)
        .collect();
    let global = &dataset.business_central.global_customers;
    let unmatched: Vec<&GlobalCustomer> = global
        .iter()
        .filter(|c| !crm.contains(&c.account_number))
        .collect();

    let fraction = unmatched.len() as f64 / global.len() as f64;
    assert!(
        (0.05..=0.15).contains(&fraction),
        "unmatched fraction {fraction} outside statistical tolerance"
    );
    // Substitutes stay inside the extended range; everything else is a
    // CRM-side number by definition of the filter above.
    assert!(unmatched
        .iter()
        .all(|c| (config.account_min..=config.extended_account_max())
            .contains(&c.account_number)));
}

#[test]
fn base_currency_rate_is_exactly_one_every_month() {
    let config = GeneratorConfig::new()
        .with_account_range(10001, 10011)
        .with_seed(13);
    let dataset = build(&config);

    let months: HashSet<&str> = dataset.fx_rates.rates.iter().map(|r| r.month.as_str()).collect();
    assert_eq!(months.len(), config.month_window);
    assert_eq!(
        dataset.fx_rates.rates.len(),
        config.month_window * 10 // one row per (month, currency)
    );
    for rate in dataset.fx_rates.rates.iter().filter(|r| r.currency == "EUR") {
        assert_eq!(rate.rate_to_eur, 1.0, "EUR must be 1.0 in {}", rate.month);
    }
    for rate in &dataset.fx_rates.rates {
        assert!(rate.rate_to_eur > 0.0);
    }
}

#[test]
fn ledger_lines_stay_within_bounds() {
    let config = GeneratorConfig::new()
        .with_account_range(10001, 10051)
        .with_journal_entries(20)
        .with_seed(17);
    let dataset = build(&config);
    assert!(!dataset.ledger.lines.is_empty());

    let month_labels: HashSet<&str> =
        dataset.fx_rates.rates.iter().map(|r| r.month.as_str()).collect();
    for line in &dataset.ledger.lines {
        assert!((100.0..=10_000.0).contains(&line.amount));
        assert!(
            (line.amount * 100.0 - (line.amount * 100.0).round()).abs() < 1e-9,
            "amount {} not rounded to 2 decimals",
            line.amount
        );
        assert!(line.date.day() <= 28);
        assert!(month_labels.contains(line.date.format("%Y-%m").to_string().as_str()));
    }
}

#[test]
fn ledger_lines_reference_pooled_journal_entries() {
    let config = GeneratorConfig::new()
        .with_account_range(10001, 10051)
        .with_journal_entries(20)
        .with_seed(19);
    let dataset = build(&config);

    let pool: HashSet<&str> = dataset
        .journal_entries
        .entries
        .iter()
        .map(|e| e.journal_id.as_str())
        .collect();
    assert_eq!(pool.len(), 20);
    for line in &dataset.ledger.lines {
        assert!(pool.contains(line.journal_id.as_str()));
    }
}

#[test]
fn each_customer_keeps_one_organizational_slice() {
    let mut generator = MockGenerator::with_seed(23);
    let now = fixed_now();
    let customers: Vec<GlobalCustomer> = (0..4)
        .map(|i| GlobalCustomer {
            id: format!("gc-{i}"),
            account_number: 20001 + i,
            currency: "EUR".to_string(),
            country_code: "CZ".to_string(),
        })
        .collect();
    let entries = generator.journal_entries(3, now);
    let accounts = finmock_gen::constants::account_dimension();
    let months = finmock_gen::months::month_window(now.date_naive(), 5);

    let lines = generator.ledger_lines(&customers, &entries, &accounts, &months);

    for customer in &customers {
        let slices: HashSet<(String, String, String, String)> = lines
            .iter()
            .filter(|l| l.account_number == customer.account_number)
            .map(|l| {
                (
                    l.entity_code.clone(),
                    l.territory.clone(),
                    l.business_unit.clone(),
                    l.consolidation_group.clone(),
                )
            })
            .collect();
        assert_eq!(slices.len(), 1, "customer {} spans slices", customer.id);
    }
}

#[test]
fn minimal_seeded_scenario_is_deterministic() {
    let config = GeneratorConfig::new()
        .with_account_range(10001, 10003)
        .with_journal_entries(1)
        .with_seed(42);
    let dataset = build(&config);

    assert_eq!(dataset.salesforce.customers.len(), 2);
    assert_eq!(dataset.business_central.global_customers.len(), 2);
    assert_eq!(dataset.journal_entries.entries.len(), 1);
    // At least one month and one account per customer.
    assert!(dataset.ledger.lines.len() >= 2);
}

#[test]
fn same_seed_and_clock_reproduce_the_dataset() {
    let config = GeneratorConfig::new()
        .with_account_range(10001, 10021)
        .with_journal_entries(5)
        .with_seed(99);
    let first = serde_json::to_string(&build(&config)).unwrap();
    let second = serde_json::to_string(&build(&config)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn optional_crm_fields_are_mostly_present() {
    let config = GeneratorConfig::new().with_seed(31);
    let dataset = build(&config);

    // Nulling probability is 1/250 per field; a full-range run keeps the
    // overwhelming majority populated.
    let populated = dataset
        .salesforce
        .customers
        .iter()
        .filter(|c| c.name.is_some())
        .count();
    assert!(populated as f64 / dataset.salesforce.customers.len() as f64 > 0.95);
}
