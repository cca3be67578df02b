//! Fixed vocabulary backing the generator.

use finmock_types::AccountDimension;

/// Currencies a customer or ledger line can carry.
pub const CURRENCIES: &[&str] = &[
    "EUR", "CZK", "USD", "GBP", "JPY", "CAD", "AUD", "CHF", "SEK", "NOK",
];

/// The currency all FX rates are expressed against.
pub const BASE_CURRENCY: &str = "EUR";

pub const COUNTRY_CODES: &[&str] = &[
    "CZ", "DE", "FR", "GB", "IT", "PL", "SK", "US", "JP", "CA", "AU", "CH", "SE", "NO",
];

/// Length of a CRM-side customer id.
pub const SALESFORCE_ID_LENGTH: usize = 18;

pub const ENTITY_CODES: &[&str] = &["ENT1", "ENT2", "ENT3"];
pub const TERRITORIES: &[&str] = &["CZ", "DE", "FR", "GB", "US"];
pub const BUSINESS_UNITS: &[&str] = &["BU1", "BU2", "BU3"];
pub const CONSOLIDATION_GROUPS: &[&str] = &["GroupA", "GroupB"];

pub const ADJECTIVES: &[&str] = &[
    "Luxurious",
    "Elegant",
    "Charming",
    "Cozy",
    "Modern",
    "Stylish",
    "Rustic",
    "Historic",
    "Boutique",
    "Quaint",
    "Secluded",
    "Romantic",
    "Peaceful",
    "Tranquil",
    "Serene",
    "Idyllic",
    "Picturesque",
    "Enchanting",
    "Enchanted",
    "Magical",
    "Mystical",
    "Whimsical",
    "Dreamy",
    "Fantastical",
    "Fairytale",
    "Heavenly",
    "Paradise",
    "Tropical",
    "Exotic",
    "Sunny",
    "Beachfront",
    "Oceanfront",
    "Seaside",
    "Mountain",
    "Alpine",
    "Forest",
    "Woodland",
    "Riverside",
    "Lakeside",
    "Countryside",
    "Vineyard",
    "Farmhouse",
    "Plantation",
    "Heritage",
    "Colonial",
    "Antique",
    "Vintage",
    "Retro",
    "Bohemian",
];

pub const NOUNS: &[&str] = &[
    "Hotel",
    "Resort",
    "Inn",
    "Lodge",
    "Retreat",
    "Hideaway",
    "Haven",
    "Sanctuary",
    "Oasis",
    "Refuge",
    "Paradise",
    "Nest",
    "Hearth",
    "Shelter",
    "Cottage",
    "Cabin",
    "Chalet",
    "Bungalow",
    "Villa",
    "Mansion",
    "Manor",
    "Estate",
    "Palace",
    "Castle",
    "Chateau",
    "Fortress",
    "Keep",
    "Tower",
    "Citadel",
    "Stronghold",
    "Fort",
    "Bastion",
    "Garrison",
    "Outpost",
];

/// The fixed chart-of-accounts reference table.
pub fn account_dimension() -> Vec<AccountDimension> {
    vec![
        AccountDimension {
            account_code: "4000".to_string(),
            account_name: "Revenue A".to_string(),
            account_type: "Revenue".to_string(),
            reporting_group: "Revenue".to_string(),
            is_pl_account: true,
        },
        AccountDimension {
            account_code: "4001".to_string(),
            account_name: "Revenue B".to_string(),
            account_type: "Revenue".to_string(),
            reporting_group: "Revenue".to_string(),
            is_pl_account: true,
        },
        AccountDimension {
            account_code: "5000".to_string(),
            account_name: "Expense A".to_string(),
            account_type: "Expense".to_string(),
            reporting_group: "Expenses".to_string(),
            is_pl_account: true,
        },
        AccountDimension {
            account_code: "1000".to_string(),
            account_name: "Cash".to_string(),
            account_type: "Asset".to_string(),
            reporting_group: "Balance Sheet".to_string(),
            is_pl_account: false,
        },
        AccountDimension {
            account_code: "2000".to_string(),
            account_name: "Accounts Payable".to_string(),
            account_type: "Liability".to_string(),
            reporting_group: "Balance Sheet".to_string(),
            is_pl_account: false,
        },
    ]
}

/// Region and country grouping for a territory, when one is on file.
pub fn territory_meta(territory: &str) -> Option<(&'static str, &'static str)> {
    match territory {
        "CZ" => Some(("EMEA", "EU")),
        "DE" => Some(("EMEA", "EU")),
        "FR" => Some(("EMEA", "EU")),
        "GB" => Some(("EMEA", "Non-EU")),
        "IT" => Some(("EMEA", "EU")),
        "PL" => Some(("EMEA", "EU")),
        "SK" => Some(("EMEA", "EU")),
        "US" => Some(("AMER", "Non-EU")),
        "JP" => Some(("APAC", "Non-EU")),
        "CA" => Some(("AMER", "Non-EU")),
        "AU" => Some(("APAC", "Non-EU")),
        "CH" => Some(("EMEA", "Non-EU")),
        "SE" => Some(("EMEA", "EU")),
        "NO" => Some(("EMEA", "Non-EU")),
        _ => None,
    }
}

/// Realistic base rate to EUR for a currency, when one is pinned.
pub fn fx_base_rate(currency: &str) -> Option<f64> {
    match currency {
        "CZK" => Some(24.5),
        "USD" => Some(1.08),
        "GBP" => Some(0.86),
        "JPY" => Some(160.0),
        "CAD" => Some(1.45),
        "AUD" => Some(1.65),
        "CHF" => Some(0.97),
        "SEK" => Some(11.5),
        "NOK" => Some(11.7),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_dimension_codes_are_unique() {
        let accounts = account_dimension();
        let mut codes: Vec<&str> = accounts.iter().map(|a| a.account_code.as_str()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), accounts.len());
    }

    #[test]
    fn every_territory_constant_has_metadata() {
        for territory in TERRITORIES {
            assert!(territory_meta(territory).is_some());
        }
    }

    #[test]
    fn base_currency_has_no_pinned_rate() {
        assert!(fx_base_rate(BASE_CURRENCY).is_none());
        assert!(fx_base_rate("XXX").is_none());
    }
}
