//! Dashboard orchestration: one uploaded bill in, one assembled view out.
//!
//! Extraction must succeed; everything layered on top degrades
//! independently. The weather outlook and both illustrations run
//! concurrently with no ordering dependency, and a cancellation token is
//! checked before results are adopted so a superseded request is provably
//! discarded rather than merely ignored.

use std::sync::Arc;

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::error::{InsightError, Result};
use crate::rank;
use crate::rebates::best_rebate;
use crate::tips::household_tip;
use crate::traits::{BillExtractor, Illustrator};
use crate::types::{BillData, RebateCatalog, RebateOption, WeatherData};
use crate::weather::WeatherService;

/// Everything one session's dashboard shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub bill: BillData,
    pub rebate: RebateOption,
    pub household_tip: String,
    pub weather: WeatherData,

    /// Rank badge data URI, or empty when generation degraded
    pub rank_image: String,

    /// Tip collage data URI, or empty when generation degraded
    pub collage: String,
}

/// Assembles dashboards from uploaded bills.
pub struct DashboardService {
    extractor: Arc<dyn BillExtractor>,
    illustrator: Arc<dyn Illustrator>,
    weather: Arc<WeatherService>,
    catalog: RebateCatalog,
    base_photo: Option<Vec<u8>>,
}

impl DashboardService {
    /// Create a service over the given gateways.
    pub fn new(
        extractor: Arc<dyn BillExtractor>,
        illustrator: Arc<dyn Illustrator>,
        weather: Arc<WeatherService>,
    ) -> Self {
        Self {
            extractor,
            illustrator,
            weather,
            catalog: RebateCatalog::default(),
            base_photo: None,
        }
    }

    /// Provide the style-reference photo the tip collage is drawn from.
    ///
    /// Without one, collage generation is skipped and degrades to the empty
    /// sentinel.
    pub fn with_base_photo(mut self, bytes: Vec<u8>) -> Self {
        self.base_photo = Some(bytes);
        self
    }

    /// The rebate catalog in use.
    pub fn catalog(&self) -> &RebateCatalog {
        &self.catalog
    }

    /// Assemble the full dashboard for an uploaded PDF bill.
    ///
    /// Fails only when extraction fails (or the token is cancelled); weather
    /// and illustrations degrade to their fallback values.
    pub async fn assemble(&self, pdf: &[u8], cancel: CancellationToken) -> Result<Dashboard> {
        let mut bill = self.extractor.extract(pdf).await?;

        if cancel.is_cancelled() {
            return Err(InsightError::Cancelled);
        }

        rank::normalize(&mut bill);

        let rebate = best_rebate(&bill, &self.catalog);
        let tip = household_tip(&bill);

        let weather_fut = self.weather.forecast(&bill.service_address);
        let rank_image_fut = async {
            if bill.rank_visual_prompt.is_empty() {
                String::new()
            } else {
                self.illustrator.rank_badge(&bill.rank_visual_prompt).await
            }
        };
        let collage_fut = async {
            match &self.base_photo {
                Some(base) => self.illustrator.collage(&bill.energy_tip, base).await,
                None => String::new(),
            }
        };

        let (weather, rank_image, collage) =
            tokio::join!(weather_fut, rank_image_fut, collage_fut);

        // A request superseded mid-flight must not surface stale results
        if cancel.is_cancelled() {
            return Err(InsightError::Cancelled);
        }

        Ok(Dashboard {
            bill,
            rebate,
            household_tip: tip,
            weather,
            rank_image,
            collage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;
    use crate::rank::EnergySaverRank;
    use crate::testing::{sample_bill, IllustrationCall, MockExtractor, MockIllustrator};

    fn service(extractor: MockExtractor, illustrator: MockIllustrator) -> DashboardService {
        // No API key: the weather panel degrades without touching the network
        DashboardService::new(
            Arc::new(extractor),
            Arc::new(illustrator),
            Arc::new(WeatherService::new(None)),
        )
    }

    #[tokio::test]
    async fn test_assemble_builds_full_dashboard() {
        let mut bill = sample_bill();
        bill.monthly_comparison.usage_current = 1200.0;
        bill.monthly_comparison.usage_previous = 1000.0;
        bill.monthly_comparison.temp_current = 80.0;
        bill.amount_due = 200.0;

        let service = service(MockExtractor::returning(bill), MockIllustrator::new());
        let dashboard = service
            .assemble(b"%PDF-", CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(dashboard.rebate.name, "Air-Source Heat Pump (Premium)");
        assert!(dashboard.household_tip.contains("insulation"));
        assert!(dashboard.household_tip.contains("During summer"));
        assert!(dashboard.rank_image.starts_with("data:image/png"));
        assert_eq!(dashboard.weather, WeatherData::unavailable());
    }

    #[tokio::test]
    async fn test_assemble_normalizes_model_rank() {
        let mut bill = sample_bill();
        bill.monthly_comparison.usage_previous = 1000.0;
        bill.monthly_comparison.usage_current = 700.0; // 30% reduction
        bill.energy_saver_rank = EnergySaverRank::Amateur; // model disagreed
        bill.next_rank = "Pro".to_string();

        let service = service(MockExtractor::returning(bill), MockIllustrator::new());
        let dashboard = service
            .assemble(b"%PDF-", CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(dashboard.bill.energy_saver_rank, EnergySaverRank::Goat);
        assert_eq!(dashboard.bill.next_rank, "");
    }

    #[tokio::test]
    async fn test_illustration_failure_degrades_to_empty() {
        let service = service(
            MockExtractor::returning(sample_bill()),
            MockIllustrator::failing(),
        );

        let dashboard = service
            .assemble(b"%PDF-", CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(dashboard.rank_image, "");
        assert_eq!(dashboard.collage, "");
    }

    #[tokio::test]
    async fn test_collage_skipped_without_base_photo() {
        let illustrator = Arc::new(MockIllustrator::new());
        let service = DashboardService::new(
            Arc::new(MockExtractor::returning(sample_bill())),
            illustrator.clone(),
            Arc::new(WeatherService::new(None)),
        );

        let dashboard = service
            .assemble(b"%PDF-", CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(dashboard.collage, "");
        assert!(illustrator
            .calls()
            .iter()
            .all(|c| !matches!(c, IllustrationCall::Collage { .. })));
    }

    #[tokio::test]
    async fn test_collage_uses_base_photo() {
        let bill = sample_bill();
        let tip = bill.energy_tip.clone();
        let illustrator = Arc::new(MockIllustrator::new());

        let service = DashboardService::new(
            Arc::new(MockExtractor::returning(bill)),
            illustrator.clone(),
            Arc::new(WeatherService::new(None)),
        )
        .with_base_photo(vec![0u8; 16]);

        let dashboard = service
            .assemble(b"%PDF-", CancellationToken::new())
            .await
            .unwrap();

        assert!(dashboard.collage.starts_with("data:image/png"));
        assert!(illustrator
            .calls()
            .contains(&IllustrationCall::Collage { tip, base_len: 16 }));
    }

    #[tokio::test]
    async fn test_extraction_failure_propagates() {
        let service = service(MockExtractor::failing(), MockIllustrator::new());
        let result = service.assemble(b"%PDF-", CancellationToken::new()).await;

        assert!(matches!(
            result,
            Err(InsightError::Extract(ExtractError::NoData))
        ));
    }

    #[tokio::test]
    async fn test_cancelled_token_discards_results() {
        let service = service(MockExtractor::returning(sample_bill()), MockIllustrator::new());

        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = service.assemble(b"%PDF-", cancel).await;
        assert!(matches!(result, Err(InsightError::Cancelled)));
    }
}
