//! Dimension tables derived from generated ledger output.
//!
//! Derivation runs as an explicit second stage over the finished ledger:
//! generate facts first, then collect the distinct classification values
//! the facts actually use and attach descriptive metadata. The derived
//! tables are therefore always a consistent superset of what ledger lines
//! reference.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use finmock_types::{
    BusinessUnitDim, ConsolidationGroupDim, EntityCodeDim, LedgerLine, TerritoryDim,
};
use rand::Rng;

use crate::constants::{territory_meta, ENTITY_CODES};
use crate::generator::MockGenerator;

/// The four dimension tables derived from ledger lines.
#[derive(Debug, Clone, Default)]
pub struct DerivedDimensions {
    pub entity_codes: Vec<EntityCodeDim>,
    pub territories: Vec<TerritoryDim>,
    pub business_units: Vec<BusinessUnitDim>,
    pub consolidation_groups: Vec<ConsolidationGroupDim>,
}

/// Collect the distinct dimension values used in `lines`, sorted, and
/// attach metadata to each.
pub fn derive(generator: &mut MockGenerator, lines: &[LedgerLine]) -> DerivedDimensions {
    let entity_codes: BTreeSet<&str> = lines.iter().map(|l| l.entity_code.as_str()).collect();
    let territories: BTreeSet<&str> = lines.iter().map(|l| l.territory.as_str()).collect();
    let business_units: BTreeSet<&str> = lines.iter().map(|l| l.business_unit.as_str()).collect();
    let consolidation_groups: BTreeSet<&str> =
        lines.iter().map(|l| l.consolidation_group.as_str()).collect();

    DerivedDimensions {
        entity_codes: entity_codes
            .into_iter()
            .map(|code| generator.entity_code_dim(code))
            .collect(),
        territories: territories
            .into_iter()
            .map(|territory| generator.territory_dim(territory))
            .collect(),
        business_units: business_units
            .into_iter()
            .map(|unit| generator.business_unit_dim(unit))
            .collect(),
        consolidation_groups: consolidation_groups
            .into_iter()
            .map(|group| generator.consolidation_group_dim(group))
            .collect(),
    }
}

impl MockGenerator {
    /// Entity code dimension row with placeholder metadata.
    pub fn entity_code_dim(&mut self, code: &str) -> EntityCodeDim {
        EntityCodeDim {
            entity_code: code.to_string(),
            description: format!("Entity {code} description"),
            created_at: NaiveDate::from_ymd_opt(2020, 1, self.rng.gen_range(1..=28))
                .expect("days 1..=28 exist in January"),
        }
    }

    /// Territory dimension row. Unknown territories fall back to the
    /// "UNKNOWN" region and country group instead of failing.
    pub fn territory_dim(&mut self, territory: &str) -> TerritoryDim {
        let (region, country_group) = territory_meta(territory).unwrap_or(("UNKNOWN", "UNKNOWN"));
        TerritoryDim {
            territory: territory.to_string(),
            description: format!("Territory {territory} description"),
            region: region.to_string(),
            country_group: country_group.to_string(),
        }
    }

    /// Business unit dimension row with placeholder metadata.
    pub fn business_unit_dim(&mut self, unit: &str) -> BusinessUnitDim {
        BusinessUnitDim {
            business_unit: unit.to_string(),
            description: format!("Business Unit {unit} description"),
            unit_type: self.choose(&["Sales", "Service", "Admin"]).to_string(),
            manager: format!("Manager {}", self.rng.gen_range(1..=10)),
        }
    }

    /// Consolidation group dimension row with placeholder metadata.
    pub fn consolidation_group_dim(&mut self, group: &str) -> ConsolidationGroupDim {
        ConsolidationGroupDim {
            consolidation_group: group.to_string(),
            description: format!("Consolidation Group {group} description"),
            group_type: self.choose(&["Internal", "External"]).to_string(),
            lead_entity: self.choose(ENTITY_CODES).to_string(),
        }
    }
}
