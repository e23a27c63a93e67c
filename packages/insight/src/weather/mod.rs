//! Weather aggregator: address → 7-day energy-impact outlook.
//!
//! [`WeatherService::forecast`] never errors. Every internal failure — a
//! missing API key, a geocoding miss, an HTTP error — converts to the
//! degraded [`WeatherData::unavailable`] panel at this boundary.

pub mod aggregate;
pub mod openweather;

use chrono::Utc;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{WeatherError, WeatherResult};
use crate::types::WeatherData;
use openweather::{Coordinates, OpenWeatherClient};

/// Fallback coordinate when no geocoding strategy succeeds: Allentown, PA,
/// a representative town in the utility's service area.
const DEFAULT_COORDINATES: Coordinates = Coordinates {
    lat: 40.6084,
    lon: -75.4902,
};

lazy_static! {
    /// "City, ST ZIP" tail of a standard service address,
    /// e.g. "297 INDIGO WAY ALLENTOWN, PA 18104" -> "ALLENTOWN, PA 18104"
    static ref CITY_STATE_ZIP: Regex =
        Regex::new(r"([A-Za-z\s]+),\s*([A-Za-z]{2})\s*(\d{5})?").unwrap();

    /// Bare 5-digit ZIP code anywhere in the address
    static ref ZIP_CODE: Regex = Regex::new(r"\b\d{5}\b").unwrap();
}

/// Extract the "City, ST ZIP" fragment from a service address, if present.
///
/// The leading character class spans spaces, so the match can begin right
/// after the house number; trim before handing it to the geocoder.
fn city_state_fragment(address: &str) -> Option<&str> {
    CITY_STATE_ZIP.find(address).map(|m| m.as_str().trim())
}

/// Extract a bare 5-digit ZIP code from a service address, if present.
fn zip_fragment(address: &str) -> Option<&str> {
    ZIP_CODE.find(address).map(|m| m.as_str())
}

/// The weather aggregator service.
pub struct WeatherService {
    client: Option<OpenWeatherClient>,
}

impl WeatherService {
    /// Create a service from an optional API key.
    ///
    /// `None`, empty, `"false"`, and `"undefined"` all mean "no key":
    /// build-time env substitution upstream has been seen to produce the
    /// literal strings, so they degrade rather than authenticate.
    pub fn new(api_key: Option<String>) -> Self {
        let client = api_key
            .filter(|key| {
                !key.is_empty() && key.as_str() != "false" && key.as_str() != "undefined"
            })
            .map(OpenWeatherClient::new);

        Self { client }
    }

    /// Create a service around an existing client (for custom base URLs).
    pub fn with_client(client: OpenWeatherClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Fetch the 7-day outlook for a free-text service address.
    ///
    /// Never errors; failures degrade to [`WeatherData::unavailable`].
    pub async fn forecast(&self, address: &str) -> WeatherData {
        match self.try_forecast(address).await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(error = %e, address, "Weather outlook degraded");
                WeatherData::unavailable()
            }
        }
    }

    async fn try_forecast(&self, address: &str) -> WeatherResult<WeatherData> {
        let client = self.client.as_ref().ok_or(WeatherError::MissingApiKey)?;

        let coords = self.resolve_coordinates(client, address).await;
        let samples = client.forecast(coords).await?;

        let today = Utc::now().date_naive();
        let forecasts = aggregate::daily_forecasts(&samples, today);
        if forecasts.is_empty() {
            return Err(WeatherError::NoSamples);
        }

        let narrative = aggregate::narrative(&forecasts);
        Ok(WeatherData {
            forecasts,
            summary: narrative.summary,
            energy_impact: narrative.energy_impact,
            tip: narrative.tip,
        })
    }

    /// Resolve an address to coordinates, falling back through ever-coarser
    /// strategies and finally to the default service-area town.
    async fn resolve_coordinates(
        &self,
        client: &OpenWeatherClient,
        address: &str,
    ) -> Coordinates {
        match self.geocode_chain(client, address).await {
            Ok(coords) => coords,
            Err(e) => {
                tracing::warn!(error = %e, address, "Geocoding failed; using default location");
                DEFAULT_COORDINATES
            }
        }
    }

    async fn geocode_chain(
        &self,
        client: &OpenWeatherClient,
        address: &str,
    ) -> WeatherResult<Coordinates> {
        if let Ok(Some(coords)) = client.geocode(address).await {
            return Ok(coords);
        }

        if let Some(fragment) = city_state_fragment(address) {
            tracing::debug!(fragment, "Retrying geocode with city/state");
            if let Ok(Some(coords)) = client.geocode(fragment).await {
                return Ok(coords);
            }
        }

        if let Some(zip) = zip_fragment(address) {
            tracing::debug!(zip, "Retrying geocode with ZIP code");
            if let Ok(Some(coords)) = client.geocode_zip(zip).await {
                return Ok(coords);
            }
        }

        Err(WeatherError::AddressNotFound {
            address: address.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_state_fragment() {
        assert_eq!(
            city_state_fragment("297 INDIGO WAY ALLENTOWN, PA 18104"),
            Some("INDIGO WAY ALLENTOWN, PA 18104")
        );
        assert_eq!(city_state_fragment("just a street name"), None);
    }

    #[test]
    fn test_city_state_fragment_without_zip() {
        assert_eq!(
            city_state_fragment("12 ELM ST BETHLEHEM, PA"),
            Some("ELM ST BETHLEHEM, PA")
        );
    }

    #[test]
    fn test_zip_fragment() {
        assert_eq!(
            zip_fragment("297 INDIGO WAY ALLENTOWN, PA 18104"),
            Some("18104")
        );
        assert_eq!(zip_fragment("no zip here"), None);
    }

    #[test]
    fn test_zip_fragment_ignores_longer_numbers() {
        assert_eq!(zip_fragment("account 123456789"), None);
    }

    #[tokio::test]
    async fn test_missing_key_degrades_without_network() {
        let service = WeatherService::new(None);
        let data = service.forecast("297 INDIGO WAY ALLENTOWN, PA 18104").await;

        assert_eq!(data, WeatherData::unavailable());
    }

    #[tokio::test]
    async fn test_placeholder_key_strings_mean_no_key() {
        for key in ["", "false", "undefined"] {
            let service = WeatherService::new(Some(key.to_string()));
            let data = service.forecast("anywhere").await;
            assert!(data.forecasts.is_empty());
        }
    }
}
