//! Router assembly and shared application state.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{Extension, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use gemini_client::GeminiClient;
use insight::{
    DashboardService, GeminiBillExtractor, GeminiIllustrator, Illustrator, WeatherService,
};

use crate::config::Config;
use crate::server::routes;

/// Uploaded bills are small, but scanned PDFs can run to a few megabytes.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<DashboardService>,
    pub illustrator: Arc<dyn Illustrator>,
    pub weather: Arc<WeatherService>,
}

/// Build the application router from configuration.
///
/// Gateways are constructed once here with their injected credentials and
/// shared by every request.
pub fn build_app(config: &Config) -> Router {
    let gemini = GeminiClient::new(config.gemini_api_key.clone());

    let extractor = Arc::new(GeminiBillExtractor::new(gemini.clone()));
    let illustrator: Arc<dyn Illustrator> = Arc::new(GeminiIllustrator::new(gemini));
    let weather = Arc::new(WeatherService::new(config.weather_api_key.clone()));

    let mut dashboard =
        DashboardService::new(extractor, illustrator.clone(), weather.clone());

    if let Some(path) = &config.base_photo_path {
        match std::fs::read(path) {
            Ok(bytes) => dashboard = dashboard.with_base_photo(bytes),
            Err(e) => {
                tracing::warn!(error = %e, path, "Base photo unreadable; collages disabled")
            }
        }
    }

    let state = AppState {
        dashboard: Arc::new(dashboard),
        illustrator,
        weather,
    };

    Router::new()
        .route("/health", get(routes::health::health_handler))
        .route("/api/bill", post(routes::bill::upload_bill_handler))
        .route("/api/weather", get(routes::weather::weather_handler))
        .route(
            "/api/illustrations/rank",
            post(routes::illustration::rank_handler),
        )
        .route(
            "/api/illustrations/persona",
            post(routes::illustration::persona_handler),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(Extension(state))
}
