//! Best-fit rebate selection.
//!
//! A pure decision ladder over {usage, temperature, amount due}: the first
//! matching rule wins, and every comparison is a strict inequality so
//! boundary values fall through to the next rule.

use crate::types::{BillData, RebateCatalog, RebateOption};

/// Pick the single best-fit offer from the catalog for this bill.
///
/// High usage in warm weather points at cooling efficiency, high usage in
/// cold weather at heating efficiency, moderate-high usage at an audit, and
/// an expensive bill at automation; everyone else starts with the free
/// virtual assessment.
pub fn best_rebate(bill: &BillData, catalog: &RebateCatalog) -> RebateOption {
    let usage = bill.monthly_comparison.usage_current;
    let temp = bill.monthly_comparison.temp_current;
    let amount_due = bill.amount_due;

    if usage > 1000.0 && temp > 70.0 {
        RebateOption::from_catalog(
            &catalog.air_source_heat_pump_premium,
            "Your high energy usage during warm months suggests upgrading to a premium heat pump could significantly reduce cooling costs.",
        )
    } else if usage > 1000.0 && temp < 50.0 {
        RebateOption::from_catalog(
            &catalog.air_source_heat_pump_premium,
            "Your high energy usage during cold months suggests a premium heat pump could reduce heating costs while providing efficient cooling in summer.",
        )
    } else if usage > 800.0 {
        RebateOption::from_catalog(
            &catalog.in_home_audit_full,
            "A comprehensive home energy audit can identify the best opportunities to reduce your energy costs.",
        )
    } else if amount_due > 150.0 {
        RebateOption::from_catalog(
            &catalog.smart_thermostat_contractor,
            "A smart thermostat can help optimize your HVAC usage and reduce costs automatically.",
        )
    } else {
        RebateOption::from_catalog(
            &catalog.virtual_audit,
            "Start with a free virtual energy assessment to identify personalized savings opportunities.",
        )
    }
}
