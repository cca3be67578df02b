//! Reference/lookup tables of descriptive attributes.
//!
//! The account dimension is a fixed table; the other four are derived from
//! the values actually used in generated ledger lines.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Chart-of-accounts reference row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountDimension {
    pub account_code: String,
    pub account_name: String,
    pub account_type: String,
    pub reporting_group: String,
    pub is_pl_account: bool,
}

/// Entity code dimension row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityCodeDim {
    pub entity_code: String,
    pub description: String,
    pub created_at: NaiveDate,
}

/// Territory dimension row with region metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerritoryDim {
    pub territory: String,
    pub description: String,
    pub region: String,
    pub country_group: String,
}

/// Business unit dimension row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessUnitDim {
    pub business_unit: String,
    pub description: String,
    pub unit_type: String,
    pub manager: String,
}

/// Consolidation group dimension row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolidationGroupDim {
    pub consolidation_group: String,
    pub description: String,
    pub group_type: String,
    pub lead_entity: String,
}
