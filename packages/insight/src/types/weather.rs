//! Weather outlook types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of the outlook, reduced from 3-hour forecast samples.
///
/// Temperatures are imperial (°F), humidity is a rounded percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub high: i32,
    pub low: i32,
    pub condition: String,
    pub humidity: i32,
}

/// The 7-day outlook plus its energy-impact narrative.
///
/// Constructed fresh for every dashboard; never cached or persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherData {
    pub forecasts: Vec<DailyForecast>,
    pub summary: String,
    pub energy_impact: String,
    pub tip: String,
}

impl WeatherData {
    /// The degraded panel shown when the outlook cannot be fetched.
    pub fn unavailable() -> Self {
        Self {
            forecasts: Vec::new(),
            summary: "Unable to fetch weather data at this time.".to_string(),
            energy_impact: "Weather data is needed to analyze energy impact.".to_string(),
            tip: "Check back later for weather-based energy tips.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_has_empty_forecasts() {
        let data = WeatherData::unavailable();
        assert!(data.forecasts.is_empty());
        assert!(data.summary.contains("Unable to fetch"));
    }

    #[test]
    fn test_forecast_serializes_iso_date() {
        let forecast = DailyForecast {
            date: NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
            high: 52,
            low: 38,
            condition: "Clouds".to_string(),
            humidity: 71,
        };

        let json = serde_json::to_value(&forecast).unwrap();
        assert_eq!(json["date"], "2025-11-03");
        assert_eq!(json["high"], 52);
    }
}
