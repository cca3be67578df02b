//! Programmatic mock data generator.
//!
//! All randomness flows through a single [`MockGenerator`] so tests can
//! fix a seed and assert deterministic output.

use std::collections::HashSet;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use finmock_types::{
    AccountDimension, AccountSection, BusinessCentralSection, FxRate, FxRateSection,
    GlobalCustomer, JournalEntry, JournalSection, JournalStatus, LedgerLine, LedgerSection,
    MockDataset, SalesforceCustomer, SalesforceSection,
};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::config::GeneratorConfig;
use crate::constants::{
    account_dimension, fx_base_rate, ADJECTIVES, BASE_CURRENCY, BUSINESS_UNITS,
    CONSOLIDATION_GROUPS, COUNTRY_CODES, CURRENCIES, ENTITY_CODES, NOUNS, SALESFORCE_ID_LENGTH,
    TERRITORIES,
};
use crate::dimensions;
use crate::months::{month_label, month_window};

/// Mock data generator holding the run's random source.
pub struct MockGenerator {
    pub(crate) rng: rand::rngs::StdRng,
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGenerator {
    /// Create a generator seeded from entropy.
    pub fn new() -> Self {
        use rand::SeedableRng;
        Self {
            rng: rand::rngs::StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed for deterministic output.
    pub fn with_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            rng: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator honoring the config's seed, entropy-seeded
    /// otherwise.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    pub(crate) fn choose<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items.choose(&mut self.rng).copied().unwrap_or_default()
    }

    /// Generate an "Adjective Noun" hotel name.
    pub fn hotel_name(&mut self) -> String {
        format!("{} {}", self.choose(ADJECTIVES), self.choose(NOUNS))
    }

    /// Random amount in [min, max] rounded to 2 decimal places.
    pub fn random_amount(&mut self, min: f64, max: f64) -> f64 {
        let amount = self.rng.gen_range(min..=max);
        (amount * 100.0).round() / 100.0
    }

    /// Produce a value that is absent with probability 1/250.
    fn sparse<T>(&mut self, build: impl FnOnce(&mut Self) -> T) -> Option<T> {
        let value = build(self);
        if self.rng.gen_range(1..=250) == 1 {
            None
        } else {
            Some(value)
        }
    }

    /// CRM-side customer record for one account number.
    ///
    /// Each optional field is independently nulled with probability 1/250,
    /// modeling sparse upstream data.
    pub fn salesforce_customer(&mut self, account_number: i64) -> SalesforceCustomer {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(SALESFORCE_ID_LENGTH);
        let is_deleted = self.rng.gen_range(0..100) == 73;
        SalesforceCustomer {
            id,
            is_deleted,
            account_number,
            name: self.sparse(|g| g.hotel_name()),
            billing_country: self.sparse(|g| g.choose(COUNTRY_CODES).to_string()),
            capacity_s: self.sparse(|g| g.rng.gen_range(1..=100)),
            capacity_m: self.sparse(|g| g.rng.gen_range(1..=100)),
            capacity_l: self.sparse(|g| g.rng.gen_range(1..=100)),
        }
    }

    /// Ledger-system-side customer record.
    ///
    /// With probability 10% the account number is replaced by one drawn
    /// from the extended range and absent from the CRM-side set; the
    /// extended range always reaches past the CRM-side set, so a
    /// replacement can never collide with a CRM-side number.
    pub fn global_customer(
        &mut self,
        account_number: i64,
        crm_numbers: &HashSet<i64>,
        config: &GeneratorConfig,
    ) -> GlobalCustomer {
        let mut account_number = account_number;
        if self.rng.gen_bool(0.10) {
            account_number = loop {
                let candidate = self
                    .rng
                    .gen_range(config.account_min..=config.extended_account_max());
                if !crm_numbers.contains(&candidate) {
                    break candidate;
                }
            };
        }
        GlobalCustomer {
            id: Uuid::new_v4().to_string(),
            account_number,
            currency: self.choose(CURRENCIES).to_string(),
            country_code: self.choose(COUNTRY_CODES).to_string(),
        }
    }

    /// One journal entry, posted within the 150 days before `now`.
    pub fn journal_entry(&mut self, now: DateTime<Utc>) -> JournalEntry {
        let roll = self.rng.gen_range(0..100);
        let status = if roll < 85 {
            JournalStatus::Posted
        } else if roll < 95 {
            JournalStatus::Unposted
        } else {
            JournalStatus::Error
        };
        let posted_at = (now - Duration::days(self.rng.gen_range(0..=150)))
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        JournalEntry {
            journal_id: Uuid::new_v4().to_string(),
            source_system: "BC".to_string(),
            posted_by: self.choose(&["system", "user", "api"]).to_string(),
            status,
            posted_at,
        }
    }

    /// The shared journal entry pool, generated up front.
    pub fn journal_entries(&mut self, count: usize, now: DateTime<Utc>) -> Vec<JournalEntry> {
        (0..count).map(|_| self.journal_entry(now)).collect()
    }

    /// General ledger lines for the given customers over the month window.
    ///
    /// Each customer belongs to exactly one entity code, territory,
    /// business unit and consolidation group across all of its lines, and
    /// posts into a non-empty subset of months and a non-empty subset of
    /// accounts per month.
    pub fn ledger_lines(
        &mut self,
        customers: &[GlobalCustomer],
        entries: &[JournalEntry],
        accounts: &[AccountDimension],
        months: &[NaiveDate],
    ) -> Vec<LedgerLine> {
        let mut lines = Vec::new();
        for customer in customers {
            let entity_code = self.choose(ENTITY_CODES).to_string();
            let territory = self.choose(TERRITORIES).to_string();
            let business_unit = self.choose(BUSINESS_UNITS).to_string();
            let consolidation_group = self.choose(CONSOLIDATION_GROUPS).to_string();

            let month_count = self.rng.gen_range(1..=months.len());
            let used_months: Vec<NaiveDate> = months
                .choose_multiple(&mut self.rng, month_count)
                .copied()
                .collect();
            for month in used_months {
                let account_count = self.rng.gen_range(1..=accounts.len());
                let used_accounts: Vec<&AccountDimension> =
                    accounts.choose_multiple(&mut self.rng, account_count).collect();
                for account in used_accounts {
                    let day = self.rng.gen_range(1..=28);
                    let date = month.with_day(day).expect("days 1..=28 exist in every month");
                    let entry = entries
                        .choose(&mut self.rng)
                        .expect("journal entry pool is never empty");
                    lines.push(LedgerLine {
                        id: Uuid::new_v4().to_string(),
                        journal_id: entry.journal_id.clone(),
                        account_number: customer.account_number,
                        account_code: account.account_code.clone(),
                        date,
                        currency: self.choose(CURRENCIES).to_string(),
                        amount: self.random_amount(100.0, 10_000.0),
                        entity_code: entity_code.clone(),
                        territory: territory.clone(),
                        business_unit: business_unit.clone(),
                        consolidation_group: consolidation_group.clone(),
                        is_adjustment_entry: self.rng.gen_bool(0.05),
                        is_manual: self.rng.gen_bool(0.10),
                    });
                }
            }
        }
        lines
    }

    /// FX rates per (month, currency) over the window.
    ///
    /// The base currency is pinned at exactly 1.0 every month; every other
    /// currency drifts independently per month within ±2% of its base
    /// rate, rounded to 4 decimals.
    pub fn fx_rates(&mut self, months: &[NaiveDate]) -> Vec<FxRate> {
        let mut rates = Vec::with_capacity(months.len() * CURRENCIES.len());
        for month in months {
            for currency in CURRENCIES {
                let rate = if *currency == BASE_CURRENCY {
                    1.0
                } else {
                    let base =
                        fx_base_rate(currency).unwrap_or_else(|| self.rng.gen_range(0.5..=30.0));
                    round4(base * self.rng.gen_range(0.98..=1.02))
                };
                rates.push(FxRate {
                    month: month_label(*month),
                    currency: currency.to_string(),
                    rate_to_eur: rate,
                });
            }
        }
        rates
    }

    /// Assemble the complete dataset for one run, as of now.
    pub fn build_dataset(&mut self, config: &GeneratorConfig) -> MockDataset {
        self.build_dataset_at(config, Utc::now())
    }

    /// Assemble the complete dataset as of a fixed point in time.
    ///
    /// Every number in the configured account range gets exactly one
    /// CRM-side record and one ledger-system-side record.
    pub fn build_dataset_at(&mut self, config: &GeneratorConfig, now: DateTime<Utc>) -> MockDataset {
        let mut customers = Vec::with_capacity(config.account_count());
        let mut crm_numbers = HashSet::with_capacity(config.account_count());
        for account_number in config.account_min..config.account_max {
            customers.push(self.salesforce_customer(account_number));
            crm_numbers.insert(account_number);
        }

        let mut global_customers = Vec::with_capacity(config.account_count());
        for account_number in config.account_min..config.account_max {
            global_customers.push(self.global_customer(account_number, &crm_numbers, config));
        }

        let accounts = account_dimension();
        let months = month_window(now.date_naive(), config.month_window);
        let rates = self.fx_rates(&months);
        let entries = self.journal_entries(config.journal_entry_count, now);
        let lines = self.ledger_lines(&global_customers, &entries, &accounts, &months);

        // Dimensions derive from the finished ledger, so every value a line
        // references is guaranteed a dimension row.
        let dims = dimensions::derive(self, &lines);

        MockDataset {
            salesforce: SalesforceSection { customers },
            business_central: BusinessCentralSection { global_customers },
            ledger: LedgerSection { lines },
            fx_rates: FxRateSection { rates },
            journal_entries: JournalSection { entries },
            accounts: AccountSection { dimension: accounts },
            entity_codes: dims.entity_codes,
            territories: dims.territories,
            business_units: dims.business_units,
            consolidation_groups: dims.consolidation_groups,
        }
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotel_names_combine_two_words() {
        let mut generator = MockGenerator::with_seed(1);
        let name = generator.hotel_name();
        assert_eq!(name.split_whitespace().count(), 2);
    }

    #[test]
    fn random_amounts_round_to_two_decimals() {
        let mut generator = MockGenerator::with_seed(2);
        for _ in 0..100 {
            let amount = generator.random_amount(100.0, 10_000.0);
            assert!((100.0..=10_000.0).contains(&amount));
            assert!((amount * 100.0 - (amount * 100.0).round()).abs() < 1e-9);
        }
    }

    #[test]
    fn salesforce_ids_have_fixed_length() {
        let mut generator = MockGenerator::with_seed(3);
        let customer = generator.salesforce_customer(10001);
        assert_eq!(customer.id.len(), SALESFORCE_ID_LENGTH);
    }
}
