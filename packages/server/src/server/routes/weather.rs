//! Standalone weather outlook route.

use axum::extract::{Extension, Query};
use axum::Json;
use serde::Deserialize;

use insight::WeatherData;

use crate::server::app::AppState;

#[derive(Deserialize)]
pub struct WeatherParams {
    pub address: String,
}

/// Fetch the 7-day outlook for a service address.
///
/// Always 200: failures arrive as the degraded panel payload, matching the
/// aggregator's never-errors contract.
pub async fn weather_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<WeatherParams>,
) -> Json<WeatherData> {
    Json(state.weather.forecast(&params.address).await)
}
