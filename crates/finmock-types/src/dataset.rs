//! The single structured document exchanged between generator and loader.
//!
//! Top-level keys and nesting are an exact contract: the loader and the
//! browse API both consume this shape, field for field.

use serde::{Deserialize, Serialize};

use crate::customer::{GlobalCustomer, SalesforceCustomer};
use crate::dimension::{
    AccountDimension, BusinessUnitDim, ConsolidationGroupDim, EntityCodeDim, TerritoryDim,
};
use crate::fx::FxRate;
use crate::journal::JournalEntry;
use crate::ledger::LedgerLine;

/// `salesforce` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesforceSection {
    pub customers: Vec<SalesforceCustomer>,
}

/// `business_central` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessCentralSection {
    pub global_customers: Vec<GlobalCustomer>,
}

/// `ledger` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSection {
    pub lines: Vec<LedgerLine>,
}

/// `fx_rates` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FxRateSection {
    pub rates: Vec<FxRate>,
}

/// `journal_entries` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalSection {
    pub entries: Vec<JournalEntry>,
}

/// `accounts` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSection {
    pub dimension: Vec<AccountDimension>,
}

/// The complete generated dataset.
///
/// Generated once per run, held in memory, serialized, never mutated
/// afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockDataset {
    pub salesforce: SalesforceSection,
    pub business_central: BusinessCentralSection,
    pub ledger: LedgerSection,
    pub fx_rates: FxRateSection,
    pub journal_entries: JournalSection,
    pub accounts: AccountSection,
    pub entity_codes: Vec<EntityCodeDim>,
    pub territories: Vec<TerritoryDim>,
    pub business_units: Vec<BusinessUnitDim>,
    pub consolidation_groups: Vec<ConsolidationGroupDim>,
}

impl MockDataset {
    /// Total number of rows across every section.
    pub fn row_count(&self) -> usize {
        self.salesforce.customers.len()
            + self.business_central.global_customers.len()
            + self.ledger.lines.len()
            + self.fx_rates.rates.len()
            + self.journal_entries.entries.len()
            + self.accounts.dimension.len()
            + self.entity_codes.len()
            + self.territories.len()
            + self.business_units.len()
            + self.consolidation_groups.len()
    }
}
