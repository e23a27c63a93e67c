//! Energy Saver Rank: the four-tier ladder and its progress-ring math.
//!
//! The rank trio (rank, percent-to-next, next-rank label) arrives from the
//! extraction model, which is instructed to apply the same thresholds. The
//! model is not trusted to be arithmetically consistent, so [`normalize`]
//! re-derives the trio from the usage comparison after parsing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::BillData;

/// Four-tier gamified badge derived from year-over-year usage reduction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum EnergySaverRank {
    Amateur,
    Pro,
    #[serde(rename = "All-Star")]
    AllStar,
    #[serde(rename = "G.O.A.T.")]
    Goat,
}

/// Progress-ring radius used by the dashboard's SVG arc.
pub const RING_RADIUS: f64 = 45.0;

impl EnergySaverRank {
    /// Display / wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amateur => "Amateur",
            Self::Pro => "Pro",
            Self::AllStar => "All-Star",
            Self::Goat => "G.O.A.T.",
        }
    }

    /// Tier for a usage reduction percentage (positive = usage decreased).
    ///
    /// G.O.A.T. >20%, All-Star 10-20%, Pro 1-10%, Amateur below 1% (which
    /// includes increased usage).
    pub fn from_reduction(reduction_percent: f64) -> Self {
        if reduction_percent > 20.0 {
            Self::Goat
        } else if reduction_percent >= 10.0 {
            Self::AllStar
        } else if reduction_percent >= 1.0 {
            Self::Pro
        } else {
            Self::Amateur
        }
    }

    /// The next tier up, if any.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Amateur => Some(Self::Pro),
            Self::Pro => Some(Self::AllStar),
            Self::AllStar => Some(Self::Goat),
            Self::Goat => None,
        }
    }

    /// Label of the next tier; empty at the top.
    pub fn next_label(&self) -> &'static str {
        self.next().map(|r| r.as_str()).unwrap_or("")
    }

    /// Additional reduction percentage needed to reach the next tier.
    ///
    /// Amateur needs 1% total, Pro 10%, All-Star 20%; G.O.A.T. needs nothing.
    pub fn percent_to_next(&self, reduction_percent: f64) -> f64 {
        let needed = match self {
            Self::Amateur => {
                if reduction_percent > 0.0 {
                    1.0 - reduction_percent
                } else {
                    1.0
                }
            }
            Self::Pro => 10.0 - reduction_percent,
            Self::AllStar => 20.0 - reduction_percent,
            Self::Goat => 0.0,
        };
        needed.max(0.0)
    }

    /// Share of the circular arc filled for this tier.
    ///
    /// Purely presentational and independent of the numeric
    /// percent-to-next-level value.
    pub fn ring_progress(&self) -> u8 {
        match self {
            Self::Amateur => 25,
            Self::Pro => 50,
            Self::AllStar => 75,
            Self::Goat => 100,
        }
    }

    /// Stroke-dash offset for the progress ring at [`RING_RADIUS`].
    pub fn ring_offset(&self) -> f64 {
        let circumference = 2.0 * std::f64::consts::PI * RING_RADIUS;
        circumference - (f64::from(self.ring_progress()) / 100.0) * circumference
    }
}

impl std::fmt::Display for EnergySaverRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Re-derive the rank trio from the usage comparison and clamp the bill to it.
///
/// Keeps rank, percentToNextLevel, and nextRank mutually consistent even when
/// the model's own arithmetic drifted.
pub fn normalize(bill: &mut BillData) {
    let reduction = bill.usage_reduction_percent();
    let rank = EnergySaverRank::from_reduction(reduction);

    bill.energy_saver_rank = rank;
    bill.percent_to_next_level = rank.percent_to_next(reduction);
    bill.next_rank = rank.next_label().to_string();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_bill;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(EnergySaverRank::from_reduction(25.0), EnergySaverRank::Goat);
        assert_eq!(
            EnergySaverRank::from_reduction(20.0),
            EnergySaverRank::AllStar
        );
        assert_eq!(
            EnergySaverRank::from_reduction(10.0),
            EnergySaverRank::AllStar
        );
        assert_eq!(EnergySaverRank::from_reduction(9.9), EnergySaverRank::Pro);
        assert_eq!(EnergySaverRank::from_reduction(1.0), EnergySaverRank::Pro);
        assert_eq!(
            EnergySaverRank::from_reduction(0.5),
            EnergySaverRank::Amateur
        );
        assert_eq!(
            EnergySaverRank::from_reduction(-15.0),
            EnergySaverRank::Amateur
        );
    }

    #[test]
    fn test_tiers_are_ordered() {
        assert!(EnergySaverRank::Amateur < EnergySaverRank::Pro);
        assert!(EnergySaverRank::Pro < EnergySaverRank::AllStar);
        assert!(EnergySaverRank::AllStar < EnergySaverRank::Goat);
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_value(EnergySaverRank::Goat).unwrap(),
            "G.O.A.T."
        );
        assert_eq!(
            serde_json::to_value(EnergySaverRank::AllStar).unwrap(),
            "All-Star"
        );

        let parsed: EnergySaverRank = serde_json::from_str("\"All-Star\"").unwrap();
        assert_eq!(parsed, EnergySaverRank::AllStar);
    }

    #[test]
    fn test_percent_to_next() {
        // At 0% (or worse) an Amateur needs the full 1%
        assert_eq!(EnergySaverRank::Amateur.percent_to_next(0.0), 1.0);
        assert_eq!(EnergySaverRank::Amateur.percent_to_next(-8.0), 1.0);
        // Already part of the way there
        assert!((EnergySaverRank::Amateur.percent_to_next(0.4) - 0.6).abs() < 1e-9);
        assert!((EnergySaverRank::Pro.percent_to_next(5.0) - 5.0).abs() < 1e-9);
        assert!((EnergySaverRank::AllStar.percent_to_next(12.0) - 8.0).abs() < 1e-9);
        assert_eq!(EnergySaverRank::Goat.percent_to_next(30.0), 0.0);
    }

    #[test]
    fn test_ring_progress_mapping() {
        assert_eq!(EnergySaverRank::Amateur.ring_progress(), 25);
        assert_eq!(EnergySaverRank::Pro.ring_progress(), 50);
        assert_eq!(EnergySaverRank::AllStar.ring_progress(), 75);
        assert_eq!(EnergySaverRank::Goat.ring_progress(), 100);
    }

    #[test]
    fn test_ring_offset_full_at_goat() {
        // 100% progress leaves no dash offset
        assert!(EnergySaverRank::Goat.ring_offset().abs() < 1e-9);

        // 25% progress leaves three quarters of the circumference
        let circumference = 2.0 * std::f64::consts::PI * RING_RADIUS;
        assert!((EnergySaverRank::Amateur.ring_offset() - circumference * 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_clamps_inconsistent_trio() {
        let mut bill = sample_bill();
        bill.monthly_comparison.usage_previous = 1000.0;
        bill.monthly_comparison.usage_current = 880.0; // 12% reduction
        bill.energy_saver_rank = EnergySaverRank::Goat; // model got carried away
        bill.percent_to_next_level = 0.0;
        bill.next_rank = String::new();

        normalize(&mut bill);

        assert_eq!(bill.energy_saver_rank, EnergySaverRank::AllStar);
        assert!((bill.percent_to_next_level - 8.0).abs() < 1e-9);
        assert_eq!(bill.next_rank, "G.O.A.T.");
    }

    #[test]
    fn test_normalize_top_tier_has_empty_next() {
        let mut bill = sample_bill();
        bill.monthly_comparison.usage_previous = 1000.0;
        bill.monthly_comparison.usage_current = 700.0; // 30% reduction

        normalize(&mut bill);

        assert_eq!(bill.energy_saver_rank, EnergySaverRank::Goat);
        assert_eq!(bill.percent_to_next_level, 0.0);
        assert_eq!(bill.next_rank, "");
    }
}
