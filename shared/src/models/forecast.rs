//! Multi-day yield forecast models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Response field carrying the per-day forecast
pub const FORECAST_FIELD: &str = "forecast";

/// Horizon used when none is given
pub const DEFAULT_HORIZON: u32 = 7;

/// Historical yield sent by the graph page when the user leaves
/// `recent_yield` empty.
pub const GRAPH_FALLBACK_YIELD: [f64; 10] = [25.0, 26.0, 27.0, 28.0, 28.5, 29.0, 30.0, 30.5, 31.0, 31.5];

/// Historical yield sent by the forecast list page when the user leaves
/// `recent_yield` empty.
// NOTE: differs from GRAPH_FALLBACK_YIELD; kept apart until product decides
// whether both pages should share one history.
pub const FORM_FALLBACK_YIELD: [f64; 7] = [25.0, 25.3, 25.6, 26.0, 26.3, 26.6, 27.0];

/// Body of `POST /forecast`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastRequest {
    pub horizon: u32,
    pub temperature: Vec<f64>,
    pub humidity: Vec<f64>,
    #[serde(rename = "N")]
    pub nitrogen: Vec<f64>,
    #[serde(rename = "P")]
    pub phosphorus: Vec<f64>,
    #[serde(rename = "K")]
    pub potassium: Vec<f64>,
    pub recent_yield: Vec<f64>,
}

/// One day of a projected forecast, shaped for chart rows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastPoint {
    /// 1-based day label, e.g. `Day 1`
    pub day: String,
    #[serde(rename = "yield")]
    pub yield_tons_per_hectare: f64,
}

impl ForecastPoint {
    pub fn new(index: usize, yield_tons_per_hectare: f64) -> Self {
        Self {
            day: format!("Day {}", index + 1),
            yield_tons_per_hectare,
        }
    }
}

impl std::fmt::Display for ForecastPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:.2} tons/ha", self.day, self.yield_tons_per_hectare)
    }
}

/// A renderable forecast series
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ForecastSeries {
    /// Date the forecast is labelled from (list page only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    pub points: Vec<ForecastPoint>,
}

impl ForecastSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.yield_tons_per_hectare).collect()
    }

    /// Heading shown above the forecast list
    pub fn heading(&self) -> String {
        match self.start_date {
            Some(date) => format!("Forecast Results (from {}):", date.format("%Y-%m-%d")),
            None => "Forecast Results:".to_string(),
        }
    }

    /// One display line per day
    pub fn lines(&self) -> Vec<String> {
        self.points.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_service_field_names() {
        let request = ForecastRequest {
            horizon: 7,
            temperature: vec![26.0],
            humidity: vec![70.0],
            nitrogen: vec![90.0],
            phosphorus: vec![40.0],
            potassium: vec![45.0],
            recent_yield: GRAPH_FALLBACK_YIELD.to_vec(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["horizon"], 7);
        assert_eq!(json["N"][0], 90.0);
        assert_eq!(json["P"][0], 40.0);
        assert_eq!(json["K"][0], 45.0);
        assert_eq!(json["recent_yield"].as_array().unwrap().len(), 10);
    }

    #[test]
    fn test_point_row_shape() {
        let point = ForecastPoint::new(0, 3.4);
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["day"], "Day 1");
        assert_eq!(json["yield"], 3.4);
        assert_eq!(point.to_string(), "Day 1: 3.40 tons/ha");
    }

    #[test]
    fn test_series_heading() {
        let series = ForecastSeries {
            start_date: NaiveDate::from_ymd_opt(2026, 3, 14),
            points: vec![ForecastPoint::new(0, 1.0), ForecastPoint::new(1, 2.5)],
        };
        assert_eq!(series.heading(), "Forecast Results (from 2026-03-14):");
        assert_eq!(series.lines(), vec!["Day 1: 1.00 tons/ha", "Day 2: 2.50 tons/ha"]);
        assert_eq!(series.values(), vec![1.0, 2.5]);
    }
}
