//! Typed OpenWeatherMap client: geocoding and the 5-day/3-hour forecast feed.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{WeatherError, WeatherResult};
use crate::weather::aggregate::ForecastSample;

const GEO_BASE_URL: &str = "https://api.openweathermap.org/geo/1.0";
const DATA_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// A resolved latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// OpenWeatherMap API client.
pub struct OpenWeatherClient {
    client: reqwest::Client,
    api_key: SecretString,
    geo_base_url: String,
    data_base_url: String,
}

impl OpenWeatherClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: SecretString::from(api_key.into()),
            geo_base_url: GEO_BASE_URL.to_string(),
            data_base_url: DATA_BASE_URL.to_string(),
        }
    }

    /// Override both base URLs (for proxies or tests).
    pub fn with_base_urls(mut self, geo: impl Into<String>, data: impl Into<String>) -> Self {
        self.geo_base_url = geo.into();
        self.data_base_url = data.into();
        self
    }

    /// Resolve a free-text place query to coordinates.
    ///
    /// Returns `None` when the geocoder has no match (as opposed to a
    /// transport or API failure).
    pub async fn geocode(&self, query: &str) -> WeatherResult<Option<Coordinates>> {
        #[derive(serde::Deserialize)]
        struct GeoEntry {
            lat: f64,
            lon: f64,
        }

        let response = self
            .client
            .get(format!("{}/direct", self.geo_base_url))
            .query(&[
                ("q", query),
                ("limit", "1"),
                ("appid", self.api_key.expose_secret()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::Http(Box::new(e)))?;

        if !response.status().is_success() {
            return Err(WeatherError::Api(format!(
                "geocoding failed: {}",
                response.status()
            )));
        }

        let entries: Vec<GeoEntry> = response
            .json()
            .await
            .map_err(|e| WeatherError::Http(Box::new(e)))?;

        Ok(entries
            .first()
            .map(|e| Coordinates { lat: e.lat, lon: e.lon }))
    }

    /// Resolve a US ZIP code to coordinates via the ZIP-specific endpoint.
    pub async fn geocode_zip(&self, zip: &str) -> WeatherResult<Option<Coordinates>> {
        // The ZIP endpoint returns a single object, not an array
        #[derive(serde::Deserialize)]
        struct ZipEntry {
            lat: f64,
            lon: f64,
        }

        let response = self
            .client
            .get(format!("{}/zip", self.geo_base_url))
            .query(&[
                ("zip", format!("{},US", zip).as_str()),
                ("appid", self.api_key.expose_secret()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::Http(Box::new(e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(WeatherError::Api(format!(
                "ZIP geocoding failed: {}",
                response.status()
            )));
        }

        let entry: ZipEntry = response
            .json()
            .await
            .map_err(|e| WeatherError::Http(Box::new(e)))?;

        Ok(Some(Coordinates {
            lat: entry.lat,
            lon: entry.lon,
        }))
    }

    /// Fetch the 5-day/3-hour forecast feed for a location (imperial units).
    pub async fn forecast(&self, coords: Coordinates) -> WeatherResult<Vec<ForecastSample>> {
        #[derive(serde::Deserialize)]
        struct ForecastResponse {
            list: Vec<ForecastEntry>,
        }

        #[derive(serde::Deserialize)]
        struct ForecastEntry {
            dt: i64,
            main: MainMetrics,
            weather: Vec<ConditionEntry>,
        }

        #[derive(serde::Deserialize)]
        struct MainMetrics {
            temp: f64,
            humidity: f64,
        }

        #[derive(serde::Deserialize)]
        struct ConditionEntry {
            main: String,
        }

        let response = self
            .client
            .get(format!("{}/forecast", self.data_base_url))
            .query(&[
                ("lat", coords.lat.to_string().as_str()),
                ("lon", coords.lon.to_string().as_str()),
                ("units", "imperial"),
                ("appid", self.api_key.expose_secret()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::Http(Box::new(e)))?;

        if !response.status().is_success() {
            return Err(WeatherError::Api(format!(
                "forecast request failed: {}",
                response.status()
            )));
        }

        let forecast: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Http(Box::new(e)))?;

        Ok(forecast
            .list
            .into_iter()
            .map(|entry| ForecastSample {
                timestamp: entry.dt,
                temp: entry.main.temp,
                humidity: entry.main.humidity,
                condition: entry
                    .weather
                    .first()
                    .map(|w| w.main.clone())
                    .unwrap_or_default(),
            })
            .collect())
    }
}
