//! Household efficiency tip heuristic.
//!
//! Pure and total: a base tip chosen by usage tier (with an address-pattern
//! variant for likely-older neighborhoods), plus an optional seasonal
//! sentence. Both temperature boundaries are exclusive: exactly 70 or 50
//! appends nothing.

use crate::types::BillData;

/// Address substrings that suggest an older neighborhood.
const OLDER_AREA_MARKERS: [&str; 4] = ["street", "ave", "old", "main"];

const TIP_HIGH_USAGE_OLDER: &str = "Older homes often have less insulation and air leaks. Consider an energy audit to identify where you're losing energy. Air sealing and insulation upgrades can reduce heating and cooling costs by up to 30%.";

const TIP_HIGH_USAGE: &str = "Your home may benefit from upgraded insulation and air sealing. These improvements can reduce energy costs year-round by keeping conditioned air inside.";

const TIP_MODERATE_USAGE: &str = "For moderate energy usage, focus on sealing drafts around windows and doors. Weatherstripping and caulking are cost-effective ways to improve efficiency.";

const TIP_LOW_USAGE: &str = "Your home appears to be relatively energy-efficient. Maintain this by scheduling regular HVAC maintenance and replacing air filters monthly.";

const TIP_SUMMER: &str = " During summer, use window coverings to block direct sunlight and reduce cooling needs.";

const TIP_WINTER: &str = " During winter, ensure your heating system is properly maintained and consider a programmable thermostat to optimize usage.";

/// Derive a free-text efficiency tip from usage, temperature, and address.
pub fn household_tip(bill: &BillData) -> String {
    let usage = bill.monthly_comparison.usage_current;
    let temp = bill.monthly_comparison.temp_current;
    let address = bill.service_address.to_lowercase();

    let likely_older_area = OLDER_AREA_MARKERS
        .iter()
        .any(|marker| address.contains(marker));

    let mut tip = if usage > 1000.0 {
        if likely_older_area {
            TIP_HIGH_USAGE_OLDER.to_string()
        } else {
            TIP_HIGH_USAGE.to_string()
        }
    } else if usage > 600.0 {
        TIP_MODERATE_USAGE.to_string()
    } else {
        TIP_LOW_USAGE.to_string()
    };

    if temp > 70.0 {
        tip.push_str(TIP_SUMMER);
    } else if temp < 50.0 {
        tip.push_str(TIP_WINTER);
    }

    tip
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_bill;

    fn bill(usage: f64, temp: f64, address: &str) -> BillData {
        let mut bill = sample_bill();
        bill.monthly_comparison.usage_current = usage;
        bill.monthly_comparison.temp_current = temp;
        bill.service_address = address.to_string();
        bill
    }

    #[test]
    fn test_high_usage_older_area_variant() {
        let tip = household_tip(&bill(1200.0, 60.0, "15 OLD MILL ROAD ALLENTOWN, PA 18104"));
        assert!(tip.contains("Older homes often have less insulation"));
    }

    #[test]
    fn test_older_area_match_is_case_insensitive() {
        let tip = household_tip(&bill(1200.0, 60.0, "297 MAIN ST ALLENTOWN, PA 18104"));
        assert!(tip.contains("Older homes"));
    }

    #[test]
    fn test_high_usage_generic_variant() {
        let tip = household_tip(&bill(1200.0, 60.0, "297 Indigo Way"));
        assert!(tip.contains("upgraded insulation and air sealing"));
        assert!(!tip.contains("Older homes"));
    }

    #[test]
    fn test_moderate_usage_gets_weatherstripping() {
        let tip = household_tip(&bill(800.0, 60.0, "297 Indigo Way"));
        assert!(tip.contains("Weatherstripping and caulking"));
    }

    #[test]
    fn test_low_usage_gets_maintenance() {
        let tip = household_tip(&bill(500.0, 60.0, "297 Indigo Way"));
        assert!(tip.contains("regular HVAC maintenance"));
    }

    #[test]
    fn test_cooling_sentence_above_70() {
        let tip = household_tip(&bill(500.0, 71.0, "297 Indigo Way"));
        assert!(tip.ends_with("reduce cooling needs."));
    }

    #[test]
    fn test_heating_sentence_below_50() {
        let tip = household_tip(&bill(500.0, 45.0, "297 Indigo Way"));
        assert!(tip.ends_with("optimize usage."));
    }

    #[test]
    fn test_no_seasonal_sentence_at_exact_boundaries() {
        let at_70 = household_tip(&bill(500.0, 70.0, "297 Indigo Way"));
        assert!(at_70.ends_with("replacing air filters monthly."));

        let at_50 = household_tip(&bill(500.0, 50.0, "297 Indigo Way"));
        assert!(at_50.ends_with("replacing air filters monthly."));
    }

    #[test]
    fn test_high_usage_cooling_season_combination() {
        let tip = household_tip(&bill(1200.0, 80.0, "297 Indigo Way"));
        assert!(tip.contains("insulation and air sealing"));
        assert!(tip.contains("During summer"));
    }

    #[test]
    fn test_low_usage_heating_season_combination() {
        let tip = household_tip(&bill(500.0, 45.0, "297 Indigo Way"));
        assert!(tip.contains("relatively energy-efficient"));
        assert!(tip.contains("During winter"));
    }
}
