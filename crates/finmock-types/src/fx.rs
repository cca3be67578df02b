//! Monthly FX rates.

use serde::{Deserialize, Serialize};

/// Rate to the base currency for one (month, currency) pair.
///
/// The base currency itself is always exactly 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FxRate {
    /// "YYYY-MM".
    pub month: String,
    pub currency: String,
    pub rate_to_eur: f64,
}
