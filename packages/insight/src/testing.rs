//! Testing utilities including mock gateway implementations.
//!
//! These are useful for testing applications that use the insight library
//! without making real AI or network calls.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{ExtractError, ExtractResult};
use crate::rank::EnergySaverRank;
use crate::traits::{BillExtractor, Illustrator};
use crate::types::{BillData, MonthlyComparison};

/// A representative extracted bill for tests to start from and mutate.
pub fn sample_bill() -> BillData {
    BillData {
        customer_name: "NATALIE WESTRING".to_string(),
        customer_first_name: "NATALIE".to_string(),
        service_address: "297 INDIGO WAY ALLENTOWN, PA 18104".to_string(),
        meter_number: "8M-41022".to_string(),
        account_number: "4001-2239-881".to_string(),
        amount_due: 132.45,
        due_date: "December 2, 2025".to_string(),
        supply_charges: 74.12,
        delivery_charges: 58.33,
        energy_tip: "Run full loads in your dishwasher and washing machine to save energy."
            .to_string(),
        price_to_compare: 0.1094,
        bill_month: "November".to_string(),
        amount_comparison_sentence: "It is $12 less than last month.".to_string(),
        energy_tip_sentence: "Running full loads is an easy way to save.".to_string(),
        monthly_comparison: MonthlyComparison {
            month: "November".to_string(),
            label_previous_year: "2024".to_string(),
            label_current_year: "2025".to_string(),
            usage_previous: 1000.0,
            usage_current: 950.0,
            temp_previous: 48.0,
            temp_current: 52.0,
            daily_cost_previous: 4.61,
            daily_cost_current: 4.41,
        },
        energy_saver_rank: EnergySaverRank::Pro,
        percent_to_next_level: 5.0,
        next_rank: "All-Star".to_string(),
        rank_description: "You are doing more right than you think.".to_string(),
        rank_visual_prompt: "A cute cartoon athlete holding a lightbulb.".to_string(),
    }
}

/// A mock bill extractor returning a configured result.
pub struct MockExtractor {
    bill: Option<BillData>,
    calls: Arc<RwLock<usize>>,
}

impl MockExtractor {
    /// Extractor that always succeeds with the given bill.
    pub fn returning(bill: BillData) -> Self {
        Self {
            bill: Some(bill),
            calls: Arc::new(RwLock::new(0)),
        }
    }

    /// Extractor that always fails with [`ExtractError::NoData`].
    pub fn failing() -> Self {
        Self {
            bill: None,
            calls: Arc::new(RwLock::new(0)),
        }
    }

    /// Number of extraction calls made.
    pub fn call_count(&self) -> usize {
        *self.calls.read().unwrap()
    }
}

#[async_trait]
impl BillExtractor for MockExtractor {
    async fn extract(&self, _pdf: &[u8]) -> ExtractResult<BillData> {
        *self.calls.write().unwrap() += 1;
        self.bill.clone().ok_or(ExtractError::NoData)
    }
}

/// Record of a call made to the mock illustrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllustrationCall {
    RankBadge { prompt: String },
    Persona { prompt: String },
    Collage { tip: String, base_len: usize },
}

/// A mock illustrator returning a fixed image (or nothing, when simulating
/// failure) and recording calls for assertions.
pub struct MockIllustrator {
    image: String,
    calls: Arc<RwLock<Vec<IllustrationCall>>>,
}

impl MockIllustrator {
    /// Illustrator that returns a stub data URI for every request.
    pub fn new() -> Self {
        Self {
            image: "data:image/png;base64,c3R1Yg==".to_string(),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Illustrator that degrades every request to the empty sentinel, as the
    /// real gateway does on network failure.
    pub fn failing() -> Self {
        Self {
            image: String::new(),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Calls made so far.
    pub fn calls(&self) -> Vec<IllustrationCall> {
        self.calls.read().unwrap().clone()
    }
}

impl Default for MockIllustrator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Illustrator for MockIllustrator {
    async fn rank_badge(&self, visual_prompt: &str) -> String {
        self.calls.write().unwrap().push(IllustrationCall::RankBadge {
            prompt: visual_prompt.to_string(),
        });
        self.image.clone()
    }

    async fn persona(&self, prompt: &str) -> String {
        self.calls.write().unwrap().push(IllustrationCall::Persona {
            prompt: prompt.to_string(),
        });
        self.image.clone()
    }

    async fn collage(&self, tip: &str, base_image_png: &[u8]) -> String {
        self.calls.write().unwrap().push(IllustrationCall::Collage {
            tip: tip.to_string(),
            base_len: base_image_png.len(),
        });
        self.image.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_failing_extractor_returns_no_data() {
        let extractor = MockExtractor::failing();
        let result = extractor.extract(b"%PDF-").await;

        assert!(matches!(result, Err(ExtractError::NoData)));
        assert_eq!(extractor.call_count(), 1);
    }

    #[tokio::test]
    async fn test_failing_illustrator_returns_empty_sentinel() {
        let illustrator = MockIllustrator::failing();

        assert_eq!(illustrator.rank_badge("a goat").await, "");
        assert_eq!(
            illustrator.calls(),
            vec![IllustrationCall::RankBadge {
                prompt: "a goat".to_string()
            }]
        );
    }
}
