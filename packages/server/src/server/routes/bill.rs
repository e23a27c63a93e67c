//! Bill upload: the route that drives the whole dashboard assembly.

use axum::extract::{Extension, Multipart};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use insight::{Dashboard, InsightError};

use crate::server::app::AppState;

/// The single generic message shown for any extraction failure; no partial
/// result is ever surfaced.
const EXTRACTION_FAILED_MESSAGE: &str =
    "Failed to process the bill. Please ensure it's a valid PDF and try again.";

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Accept a multipart PDF upload and respond with the assembled dashboard.
pub async fn upload_bill_handler(
    Extension(state): Extension<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Dashboard>, (StatusCode, Json<ErrorResponse>)> {
    let mut pdf: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::warn!(error = %e, "Malformed multipart upload");
        bad_request("Could not read the uploaded file.")
    })? {
        if field.name() == Some("file") {
            let bytes = field.bytes().await.map_err(|e| {
                tracing::warn!(error = %e, "Upload body read failed");
                bad_request("Could not read the uploaded file.")
            })?;
            pdf = Some(bytes.to_vec());
            break;
        }
    }

    let pdf = pdf.ok_or_else(|| bad_request("No bill file provided."))?;

    tracing::info!(pdf_bytes = pdf.len(), "Bill uploaded");

    let dashboard = state
        .dashboard
        .assemble(&pdf, CancellationToken::new())
        .await
        .map_err(|e| match e {
            InsightError::Extract(err) => {
                tracing::error!(error = %err, "Bill extraction failed");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorResponse {
                        error: EXTRACTION_FAILED_MESSAGE.to_string(),
                    }),
                )
            }
            InsightError::Cancelled => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse {
                    error: "The request was cancelled.".to_string(),
                }),
            ),
        })?;

    Ok(Json(dashboard))
}

fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
