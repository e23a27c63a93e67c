//! Pure reduction of 3-hour forecast samples into a 7-day outlook.
//!
//! Samples are bucketed by UTC calendar date; each bucket reduces to
//! high/low/humidity/condition. Days past the end of the feed carry the last
//! computed day forward, and a feed that starts in the future seeds from its
//! earliest bucket.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate};

use crate::types::DailyForecast;

/// One 3-hour forecast sample from the feed.
#[derive(Debug, Clone)]
pub struct ForecastSample {
    /// Unix timestamp (seconds)
    pub timestamp: i64,

    /// Temperature (°F)
    pub temp: f64,

    /// Relative humidity (percent)
    pub humidity: f64,

    /// Condition label ("Clear", "Clouds", "Rain", ...)
    pub condition: String,
}

#[derive(Debug, Default)]
struct DayBucket {
    temps: Vec<f64>,
    humidity: Vec<f64>,
    conditions: Vec<String>,
}

impl DayBucket {
    fn reduce(&self, date: NaiveDate) -> DailyForecast {
        let high = self.temps.iter().cloned().fold(f64::MIN, f64::max);
        let low = self.temps.iter().cloned().fold(f64::MAX, f64::min);
        let avg_humidity = self.humidity.iter().sum::<f64>() / self.humidity.len() as f64;

        DailyForecast {
            date,
            high: high.round() as i32,
            low: low.round() as i32,
            condition: most_common_condition(&self.conditions),
            humidity: avg_humidity.round() as i32,
        }
    }
}

/// Statistical mode of condition labels; ties keep the first-seen label.
fn most_common_condition(conditions: &[String]) -> String {
    let mut best: Option<(&str, usize)> = None;

    for condition in conditions {
        let count = conditions.iter().filter(|c| *c == condition).count();
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((condition, count)),
        }
    }

    best.map(|(c, _)| c.to_string()).unwrap_or_default()
}

/// Bucket samples by UTC date and reduce each of the next 7 days.
///
/// Returns an empty list only when `samples` is empty.
pub fn daily_forecasts(samples: &[ForecastSample], today: NaiveDate) -> Vec<DailyForecast> {
    let mut buckets: BTreeMap<NaiveDate, DayBucket> = BTreeMap::new();

    for sample in samples {
        let Some(timestamp) = DateTime::from_timestamp(sample.timestamp, 0) else {
            continue;
        };
        let bucket = buckets.entry(timestamp.date_naive()).or_default();
        bucket.temps.push(sample.temp);
        bucket.humidity.push(sample.humidity);
        bucket.conditions.push(sample.condition.clone());
    }

    let mut forecasts: Vec<DailyForecast> = Vec::with_capacity(7);

    for offset in 0..7 {
        let date = today + Duration::days(offset);

        if let Some(bucket) = buckets.get(&date) {
            forecasts.push(bucket.reduce(date));
        } else if let Some(last) = forecasts.last() {
            // Feed ended; carry the last computed day forward
            forecasts.push(DailyForecast {
                date,
                ..last.clone()
            });
        } else if let Some((_, bucket)) = buckets.iter().next() {
            // Nothing computed yet; seed from the earliest available bucket
            forecasts.push(bucket.reduce(date));
        }
    }

    forecasts
}

/// Narrative derived from the daily outlook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrative {
    pub summary: String,
    pub energy_impact: String,
    pub tip: String,
}

/// Classify the week into an energy-impact band and produce its narrative.
///
/// Bands: hot (average above 75°F), cold (below 50°F), moderate otherwise.
pub fn narrative(forecasts: &[DailyForecast]) -> Narrative {
    let avg_high =
        forecasts.iter().map(|f| f64::from(f.high)).sum::<f64>() / forecasts.len() as f64;
    let avg_low = forecasts.iter().map(|f| f64::from(f.low)).sum::<f64>() / forecasts.len() as f64;
    let avg_temp = (avg_high + avg_low) / 2.0;

    let summary = format!(
        "The next week shows average temperatures of {}°F high and {}°F low.",
        avg_high.round() as i64,
        avg_low.round() as i64
    );

    let (energy_impact, tip) = if avg_temp > 75.0 {
        (
            "With temperatures averaging above 75°F, you can expect increased cooling costs. Air conditioning usage typically increases by 15-25% during hot weather periods.".to_string(),
            "Set your thermostat to 78°F when home and 85°F when away to reduce cooling costs. Consider using ceiling fans to feel 4-6°F cooler.".to_string(),
        )
    } else if avg_temp < 50.0 {
        (
            "With temperatures averaging below 50°F, heating costs will be higher. Electric heating usage can increase by 20-30% during cold snaps.".to_string(),
            "Seal drafts around windows and doors to prevent heat loss. Lower your thermostat by 7-10°F when sleeping or away to save up to 10% on heating costs.".to_string(),
        )
    } else {
        (
            "Moderate temperatures this week mean lower heating and cooling demands. This is an ideal time for energy-efficient operation.".to_string(),
            "Take advantage of mild weather by opening windows for natural ventilation instead of using HVAC systems.".to_string(),
        )
    };

    Narrative {
        summary,
        energy_impact,
        tip,
    }
}
