//! General ledger line items.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single financial transaction row in the general ledger.
///
/// The four classification fields (`entity_code`, `territory`,
/// `business_unit`, `consolidation_group`) are constant across all lines
/// of one customer and always resolve to a row in the matching dimension
/// table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerLine {
    pub id: String,
    pub journal_id: String,
    pub account_number: i64,
    pub account_code: String,
    pub date: NaiveDate,
    pub currency: String,
    pub amount: f64,
    pub entity_code: String,
    pub territory: String,
    pub business_unit: String,
    pub consolidation_group: String,
    pub is_adjustment_entry: bool,
    pub is_manual: bool,
}
