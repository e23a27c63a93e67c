//! Rebate offer types and the fixed offer catalog.

use serde::{Deserialize, Serialize};

/// One catalog entry: a fixed-amount utility incentive offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rebate {
    pub name: String,

    /// Display string ("$350", "Free")
    pub amount: String,

    pub description: String,
}

impl Rebate {
    fn new(name: &str, amount: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            amount: amount.to_string(),
            description: description.to_string(),
        }
    }
}

/// A recommended rebate: a catalog entry plus the justification for picking it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebateOption {
    pub name: String,
    pub amount: String,
    pub description: String,
    pub reason: String,
}

impl RebateOption {
    /// Build a recommendation from a catalog entry and a justification.
    pub fn from_catalog(rebate: &Rebate, reason: impl Into<String>) -> Self {
        Self {
            name: rebate.name.clone(),
            amount: rebate.amount.clone(),
            description: rebate.description.clone(),
            reason: reason.into(),
        }
    }
}

/// The utility's fixed rebate offer table.
///
/// Built once at startup and passed by reference; the recommender is a pure
/// function over a bill and this catalog.
#[derive(Debug, Clone)]
pub struct RebateCatalog {
    // Home energy assessments
    pub in_home_audit_full: Rebate,
    pub in_home_audit_partial: Rebate,
    pub virtual_audit: Rebate,

    // Insulation and air sealing
    pub attic_insulation_electric: Rebate,
    pub attic_insulation_non_electric: Rebate,
    pub basement_insulation_electric: Rebate,
    pub basement_insulation_non_electric: Rebate,
    pub air_sealing: Rebate,

    // Efficient equipment
    pub smart_thermostat_self: Rebate,
    pub smart_thermostat_contractor: Rebate,
    pub heat_pump_water_heater: Rebate,
    pub air_source_heat_pump_standard: Rebate,
    pub air_source_heat_pump_premium: Rebate,
    pub mini_split_heat_pump: Rebate,
    pub central_ac_standard: Rebate,
    pub central_ac_premium: Rebate,

    // Appliances
    pub refrigerator: Rebate,
    pub dehumidifier: Rebate,
    pub room_ac: Rebate,
}

impl Default for RebateCatalog {
    fn default() -> Self {
        Self {
            in_home_audit_full: Rebate::new(
                "In-Home Audit (electric heating and central A/C)",
                "$350",
                "Comprehensive energy assessment for homes with electric heating and central A/C",
            ),
            in_home_audit_partial: Rebate::new(
                "In-Home Audit (electric heating or central A/C)",
                "$200",
                "Energy assessment for homes with either electric heating or central A/C",
            ),
            virtual_audit: Rebate::new(
                "Virtual Home Energy Assessment",
                "Free",
                "Free virtual assessment with energy savings kit",
            ),
            attic_insulation_electric: Rebate::new(
                "Attic Insulation (electric heat)",
                "$500",
                "75% of cost up to $500 for homes with electric heat",
            ),
            attic_insulation_non_electric: Rebate::new(
                "Attic Insulation (non-electric heat)",
                "$200",
                "75% of cost up to $200 for homes with non-electric heat and central A/C",
            ),
            basement_insulation_electric: Rebate::new(
                "Basement Wall Insulation (electric heat)",
                "$500",
                "75% of cost up to $500 for homes with electric heat",
            ),
            basement_insulation_non_electric: Rebate::new(
                "Basement Wall Insulation (non-electric heat)",
                "$200",
                "75% of cost up to $200 for homes with non-electric heat and central A/C",
            ),
            air_sealing: Rebate::new(
                "Air Sealing",
                "$200",
                "Based on air infiltration reduction",
            ),
            smart_thermostat_self: Rebate::new(
                "Smart Thermostat (self-installed)",
                "$50",
                "ENERGY STAR certified smart thermostat",
            ),
            smart_thermostat_contractor: Rebate::new(
                "Smart Thermostat (Trade Ally installed)",
                "$100",
                "ENERGY STAR certified, installed by Trade Ally",
            ),
            heat_pump_water_heater: Rebate::new(
                "Heat Pump Water Heater",
                "$400",
                "UEF \u{2265} 3.3",
            ),
            air_source_heat_pump_standard: Rebate::new(
                "Air-Source Heat Pump (Standard)",
                "$350",
                "SEER2 \u{2265} 15.2, EER2 \u{2265} 11.7, HSPF2 \u{2265} 7.8",
            ),
            air_source_heat_pump_premium: Rebate::new(
                "Air-Source Heat Pump (Premium)",
                "$450",
                "SEER2 \u{2265} 16.3, EER2 \u{2265} 12.9, HSPF2 \u{2265} 8.2",
            ),
            mini_split_heat_pump: Rebate::new(
                "Mini-Split Heat Pump",
                "$400",
                "Per outdoor unit, SEER2 \u{2265} 15.2",
            ),
            central_ac_standard: Rebate::new(
                "Central A/C (Standard)",
                "$200",
                "SEER2 \u{2265} 15.2, EER2 \u{2265} 12",
            ),
            central_ac_premium: Rebate::new(
                "Central A/C (Premium)",
                "$300",
                "SEER2 \u{2265} 16.3, EER2 \u{2265} 12.9",
            ),
            refrigerator: Rebate::new(
                "ENERGY STAR Refrigerator",
                "$50",
                "ENERGY STAR certified refrigerator",
            ),
            dehumidifier: Rebate::new(
                "ENERGY STAR Dehumidifier",
                "$25",
                "ENERGY STAR certified dehumidifier",
            ),
            room_ac: Rebate::new(
                "ENERGY STAR Room A/C",
                "$15",
                "ENERGY STAR certified room air conditioner",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_amounts_are_display_strings() {
        let catalog = RebateCatalog::default();

        assert_eq!(catalog.virtual_audit.amount, "Free");
        assert_eq!(catalog.air_source_heat_pump_premium.amount, "$450");
        assert_eq!(catalog.room_ac.amount, "$15");
    }

    #[test]
    fn test_option_copies_catalog_entry() {
        let catalog = RebateCatalog::default();
        let option = RebateOption::from_catalog(&catalog.air_sealing, "Drafty house.");

        assert_eq!(option.name, "Air Sealing");
        assert_eq!(option.amount, "$200");
        assert_eq!(option.reason, "Drafty house.");
    }
}
