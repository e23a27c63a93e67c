//! Typed errors for the insight library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur while assembling a dashboard.
#[derive(Debug, Error)]
pub enum InsightError {
    /// Bill extraction failed; nothing can be shown
    #[error("extraction failed: {0}")]
    Extract(#[from] ExtractError),

    /// Operation was cancelled before results were adopted
    #[error("operation cancelled")]
    Cancelled,
}

/// Errors from the bill extraction gateway.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The model returned no usable payload
    #[error("no data extracted from bill")]
    NoData,

    /// The model returned JSON that does not match the bill schema
    #[error("malformed extraction payload: {0}")]
    Malformed(String),

    /// AI service unavailable or failed
    #[error("AI service error: {0}")]
    Service(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors inside the weather aggregator.
///
/// These never cross the `WeatherService::forecast` boundary; they are
/// converted to a degraded `WeatherData` value there.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// No weather API key configured
    #[error("weather API key not configured")]
    MissingApiKey,

    /// Every geocoding fallback came up empty
    #[error("address could not be geocoded: {address}")]
    AddressNotFound { address: String },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Weather API returned a non-success status
    #[error("weather API error: {0}")]
    Api(String),

    /// Forecast feed contained no samples
    #[error("no forecast samples returned")]
    NoSamples,
}

/// Result type alias for dashboard operations.
pub type Result<T> = std::result::Result<T, InsightError>;

/// Result type alias for extraction gateway operations.
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

/// Result type alias for internal weather operations.
pub type WeatherResult<T> = std::result::Result<T, WeatherError>;
