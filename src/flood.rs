//! Synthetic 48-hour flood risk forecast.
//!
//! Risk follows a slow sine swell plus uniform noise. Water level is derived
//! from risk, so a riskier sample always shows a higher river. Rainfall is
//! independent noise.
//!
//! # Clock and randomness injection
//! `generate_forecast` takes the anchor instant and the random source as
//! arguments. Nothing here reads the wall clock or a global generator, so a
//! fixed seed and anchor reproduce a forecast exactly.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    BASE_RISK, DATE_LABEL_FORMAT, FORECAST_POINTS, FORECAST_STEP_HOURS, HIGH_RISK_THRESHOLD,
    MAX_RAINFALL_MM, MIN_WATER_LEVEL_M, MODERATE_RISK_THRESHOLD, RELATIVE_LABEL_LIMIT,
    RISK_AMPLITUDE, RISK_FREQUENCY, RISK_NOISE, WATER_LEVEL_SPAN_M,
};

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Aggregate flood status, in ascending order of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloodStatus {
    Low,
    Moderate,
    High,
}

impl FloodStatus {
    /// Classifies the peak risk of a forecast. Thresholds are inclusive
    /// lower bounds: 70 and above is high, 40 and above is moderate.
    pub fn from_max_risk(max_risk: u8) -> Self {
        if max_risk >= HIGH_RISK_THRESHOLD {
            FloodStatus::High
        } else if max_risk >= MODERATE_RISK_THRESHOLD {
            FloodStatus::Moderate
        } else {
            FloodStatus::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FloodStatus::Low => "low",
            FloodStatus::Moderate => "moderate",
            FloodStatus::High => "high",
        }
    }
}

// ---------------------------------------------------------------------------
// Forecast types
// ---------------------------------------------------------------------------

/// One sample of the forecast series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloodForecastPoint {
    pub timestamp: DateTime<Utc>,
    pub label: String,
    /// 0-100
    pub risk_level: u8,
    /// Metres, one decimal, within [2.0, 4.5]
    pub water_level: f64,
    /// Millimetres, one decimal, within [0, 20)
    pub rainfall: f64,
}

/// A forecast series with its derived aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloodRiskData {
    pub forecast: Vec<FloodForecastPoint>,
    pub current_risk: u8,
    pub max_risk: u8,
    pub status: FloodStatus,
}

impl FloodRiskData {
    /// Derives current risk, peak risk and status from a series. An empty
    /// series aggregates to zero risk.
    pub fn from_points(forecast: Vec<FloodForecastPoint>) -> Self {
        let current_risk = forecast.first().map_or(0, |p| p.risk_level);
        let max_risk = forecast.iter().map(|p| p.risk_level).max().unwrap_or(0);
        Self {
            forecast,
            current_risk,
            max_risk,
            status: FloodStatus::from_max_risk(max_risk),
        }
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Builds a 12-point forecast at 4-hour steps starting at `now`.
pub fn generate_forecast<R: Rng>(now: DateTime<Utc>, rng: &mut R) -> FloodRiskData {
    let points = (0..FORECAST_POINTS)
        .map(|i| {
            let timestamp = now + Duration::hours(FORECAST_STEP_HOURS * i as i64);
            let risk_level = synthetic_risk(i, rng.gen_range(-RISK_NOISE..RISK_NOISE));
            // 200 tenths of a millimetre: uniform on 0.0, 0.1, ..., 19.9
            let rainfall = rng.gen_range(0..(MAX_RAINFALL_MM * 10.0) as u32) as f64 / 10.0;
            FloodForecastPoint {
                timestamp,
                label: point_label(i, timestamp),
                risk_level,
                water_level: water_level_for_risk(risk_level),
                rainfall,
            }
        })
        .collect();

    FloodRiskData::from_points(points)
}

/// Water level implied by a risk value: 2.0 m at zero risk up to 4.5 m at
/// full risk, rounded to one decimal.
pub fn water_level_for_risk(risk_level: u8) -> f64 {
    let risk = f64::from(risk_level.min(100));
    round_to_tenth(MIN_WATER_LEVEL_M + WATER_LEVEL_SPAN_M * (risk / 100.0))
}

fn synthetic_risk(index: usize, noise: f64) -> u8 {
    let swell = RISK_AMPLITUDE * (RISK_FREQUENCY * index as f64).sin();
    (BASE_RISK + swell + noise).clamp(0.0, 100.0).round() as u8
}

fn point_label(index: usize, timestamp: DateTime<Utc>) -> String {
    match index {
        0 => "Now".to_string(),
        i if i < RELATIVE_LABEL_LIMIT => format!("+{}h", FORECAST_STEP_HOURS * i as i64),
        _ => timestamp.format(DATE_LABEL_FORMAT).to_string(),
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
