//! Illustration routes.
//!
//! Both respond 200 with a possibly-empty image, mirroring the gateway's
//! never-fails contract; the client renders a placeholder for "".

use axum::extract::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::server::app::AppState;

#[derive(Deserialize)]
pub struct IllustrationRequest {
    pub prompt: String,
}

#[derive(Serialize)]
pub struct IllustrationResponse {
    /// Data URI, or empty when generation degraded
    pub image: String,
}

/// Generate the rank badge mascot for a visual prompt.
pub async fn rank_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<IllustrationRequest>,
) -> Json<IllustrationResponse> {
    let image = state.illustrator.rank_badge(&request.prompt).await;
    Json(IllustrationResponse { image })
}

/// Generate the helpful-neighbor persona portrait.
pub async fn persona_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<IllustrationRequest>,
) -> Json<IllustrationResponse> {
    let image = state.illustrator.persona(&request.prompt).await;
    Json(IllustrationResponse { image })
}
