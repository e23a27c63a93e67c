//! The canonical bill extraction result.
//!
//! Field doc comments double as the response-schema descriptions the model
//! sees, so extraction guidance lives next to the field it describes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::rank::EnergySaverRank;

/// Data from the comparison table showing usage, temp, and cost for two years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyComparison {
    /// The month name for the comparison (e.g. November)
    pub month: String,

    /// The year label for the previous period column (e.g. 2024)
    pub label_previous_year: String,

    /// The year label for the current period column (e.g. 2025)
    pub label_current_year: String,

    /// Electricity Usage (kWh) for the previous year
    pub usage_previous: f64,

    /// Electricity Usage (kWh) for the current year
    pub usage_current: f64,

    /// Avg. Temperature for the previous year
    pub temp_previous: f64,

    /// Avg. Temperature for the current year
    pub temp_current: f64,

    /// Avg. Daily Cost for the previous year
    pub daily_cost_previous: f64,

    /// Avg. Daily Cost for the current year
    pub daily_cost_current: f64,
}

/// Everything extracted from one uploaded bill.
///
/// One value per session; owned by the caller, never cached or persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BillData {
    /// Full name of the customer (e.g. NATALIE WESTRING)
    pub customer_name: String,

    /// First name of the customer extracted from the full name (e.g. NATALIE)
    pub customer_first_name: String,

    /// Service address including city, state, zip
    pub service_address: String,

    /// Meter number listed on the bill
    pub meter_number: String,

    /// Account number
    pub account_number: String,

    /// Total amount due
    pub amount_due: f64,

    /// Due date of the bill
    pub due_date: String,

    /// Total supply charges in dollars
    pub supply_charges: f64,

    /// Total delivery charges in dollars
    pub delivery_charges: f64,

    /// The 'Want to save?' energy tip text provided on the bill
    pub energy_tip: String,

    /// The utility's Price to Compare rate per kWh
    pub price_to_compare: f64,

    /// The current month shown in the usage summary/comparison section (e.g. November)
    pub bill_month: String,

    /// A short sentence comparing the current bill amount to the previous
    /// balance/bill (e.g. 'It is $46 less than last month'). Use 'Previous
    /// Balance' from the Billing Summary as last month's amount.
    pub amount_comparison_sentence: String,

    /// A short, friendly sentence summarizing the specific advice in the
    /// energy tip found on the bill.
    pub energy_tip_sentence: String,

    pub monthly_comparison: MonthlyComparison,

    /// Energy Saver Rank based SOLELY on usage reduction percentage:
    /// 'G.O.A.T.' (>20% usage reduction), 'All-Star' (10-20% usage
    /// reduction), 'Pro' (1-10% usage reduction), or 'Amateur' (no reduction
    /// or increased usage). Rank is based on usage only, not cost.
    pub energy_saver_rank: EnergySaverRank,

    /// Additional percentage reduction needed to reach the next rank level.
    /// If Amateur, 1% total reduction is needed (so at 0%, this is 1). If
    /// Pro, 10% total is needed (so at 5%, this is 5 more). If All-Star,
    /// 20% total is needed (so at 12%, this is 8 more). If G.O.A.T., 0.
    pub percent_to_next_level: f64,

    /// Name of the next rank level: 'Pro' if Amateur, 'All-Star' if Pro,
    /// 'G.O.A.T.' if All-Star, empty string if already G.O.A.T.
    pub next_rank: String,

    /// A warm, encouraging paragraph explaining the user's Energy Saver
    /// Rank. Should focus on micro-wins and building confidence. Start with
    /// acknowledging what they're doing right, then mention a small win they
    /// can take today.
    pub rank_description: String,

    /// A prompt to generate a 3D cartoon character representing the Energy
    /// Saver Rank. The character should be cute, friendly, and colorful.
    /// For G.O.A.T.: a cute goat with a friendly expression. For All-Star:
    /// a cute star with eyes. For Pro: a cartoon athlete or professional
    /// character. For Amateur: a cute seedling or young character ready to
    /// learn. The character should be holding or displaying elements related
    /// to energy efficiency (like a lightbulb, wind turbine, or energy
    /// symbol). Style should be 3D rendered, colorful, cute, and inviting -
    /// like a cartoon mascot.
    pub rank_visual_prompt: String,
}

impl BillData {
    /// Year-over-year usage reduction percentage.
    ///
    /// Positive means usage decreased. A non-positive previous-year usage
    /// reads as "no reduction" rather than dividing by zero.
    pub fn usage_reduction_percent(&self) -> f64 {
        let prev = self.monthly_comparison.usage_previous;
        if prev <= 0.0 {
            return 0.0;
        }
        (prev - self.monthly_comparison.usage_current) / prev * 100.0
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::sample_bill;

    #[test]
    fn test_usage_reduction_percent() {
        let mut bill = sample_bill();
        bill.monthly_comparison.usage_previous = 1000.0;
        bill.monthly_comparison.usage_current = 850.0;

        assert!((bill.usage_reduction_percent() - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_usage_increase_is_negative_reduction() {
        let mut bill = sample_bill();
        bill.monthly_comparison.usage_previous = 1000.0;
        bill.monthly_comparison.usage_current = 1200.0;

        assert!((bill.usage_reduction_percent() + 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_previous_usage_does_not_divide() {
        let mut bill = sample_bill();
        bill.monthly_comparison.usage_previous = 0.0;
        bill.monthly_comparison.usage_current = 500.0;

        assert_eq!(bill.usage_reduction_percent(), 0.0);
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let bill = sample_bill();
        let json = serde_json::to_value(&bill).unwrap();

        assert!(json.get("customerName").is_some());
        assert!(json.get("priceToCompare").is_some());
        assert!(json["monthlyComparison"].get("usageCurrent").is_some());
        assert!(json.get("energySaverRank").is_some());
    }
}
