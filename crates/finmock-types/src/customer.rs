//! Customer identity records as seen by the two upstream systems.
//!
//! The CRM side (Salesforce) and the ledger side (Business Central) each
//! carry their own view of a customer. The account number is the join key
//! between the two, and the overlap is deliberately imperfect.

use serde::{Deserialize, Serialize};

/// CRM-side customer record. Optional fields model gaps in upstream data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesforceCustomer {
    pub id: String,
    pub is_deleted: bool,
    pub account_number: i64,
    pub name: Option<String>,
    pub billing_country: Option<String>,
    pub capacity_s: Option<i64>,
    pub capacity_m: Option<i64>,
    pub capacity_l: Option<i64>,
}

/// Ledger-system-side customer record used for posting financial lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalCustomer {
    pub id: String,
    pub account_number: i64,
    pub currency: String,
    pub country_code: String,
}
