//! Energy Bill Insight Library
//!
//! Turns one uploaded PDF energy bill into an engaging dashboard: a
//! structured extraction, a gamified Energy Saver Rank with progress-ring
//! math, a best-fit rebate suggestion, a household efficiency tip, a 7-day
//! weather-linked energy-impact outlook, and AI-generated illustrations.
//!
//! # Design Philosophy
//!
//! **Extraction is the only hard dependency.**
//!
//! - The model does the reading; the library does the deciding
//! - Rebate, tip, and rank logic are pure functions over the extraction
//! - Weather and illustrations degrade to fixed fallbacks, never errors
//! - Gateways are constructed once with injected credentials
//! - Superseded requests are cancelled explicitly, not silently ignored
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use insight::{DashboardService, GeminiBillExtractor, GeminiIllustrator, WeatherService};
//! use gemini_client::GeminiClient;
//! use tokio_util::sync::CancellationToken;
//!
//! let gemini = GeminiClient::from_env()?;
//! let service = DashboardService::new(
//!     Arc::new(GeminiBillExtractor::new(gemini.clone())),
//!     Arc::new(GeminiIllustrator::new(gemini)),
//!     Arc::new(WeatherService::new(std::env::var("WEATHER_API_KEY").ok())),
//! );
//!
//! let dashboard = service.assemble(&pdf_bytes, CancellationToken::new()).await?;
//! println!("{} is a {}", dashboard.bill.customer_first_name, dashboard.bill.energy_saver_rank);
//! ```
//!
//! # Modules
//!
//! - [`types`] - Domain data types (bill, weather, rebate)
//! - [`traits`] - Gateway abstractions (BillExtractor, Illustrator)
//! - [`ai`] - Gemini gateway implementations
//! - [`weather`] - Address geocoding and 7-day outlook aggregation
//! - [`rebates`] / [`tips`] / [`rank`] - Pure insight heuristics
//! - [`dashboard`] - Orchestration of one session's assembly
//! - [`testing`] - Mock implementations for testing

pub mod ai;
pub mod dashboard;
pub mod error;
pub mod prompts;
pub mod rank;
pub mod rebates;
pub mod testing;
pub mod tips;
pub mod traits;
pub mod types;
pub mod weather;

// Re-export core types at crate root
pub use error::{ExtractError, InsightError, WeatherError};
pub use traits::{BillExtractor, Illustrator};
pub use types::{
    BillData, DailyForecast, MonthlyComparison, Rebate, RebateCatalog, RebateOption, WeatherData,
};

// Re-export the heuristics
pub use rank::EnergySaverRank;
pub use rebates::best_rebate;
pub use tips::household_tip;

// Re-export gateways and services
pub use ai::{GeminiBillExtractor, GeminiIllustrator};
pub use dashboard::{Dashboard, DashboardService};
pub use weather::WeatherService;
