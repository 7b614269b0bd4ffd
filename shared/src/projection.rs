//! Projection of service responses into renderable results

use chrono::NaiveDate;
use serde_json::Value;
use thiserror::Error;

use crate::models::{
    ForecastPoint, ForecastSeries, YieldEstimate, FORECAST_FIELD, PREDICTED_YIELD_FIELD,
};

/// The response arrived but does not hold what the page needs
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PresentationError {
    #[error("response is missing {0}")]
    MissingField(&'static str),

    #[error("response field {field} is malformed: {reason}")]
    Malformed { field: &'static str, reason: String },
}

/// Extract the predicted yield from a `/predict` response body
pub fn project_prediction(body: &Value) -> Result<YieldEstimate, PresentationError> {
    let value = body
        .get(PREDICTED_YIELD_FIELD)
        .filter(|v| !v.is_null())
        .ok_or(PresentationError::MissingField(PREDICTED_YIELD_FIELD))?;

    let tons_per_hectare = value.as_f64().ok_or_else(|| PresentationError::Malformed {
        field: PREDICTED_YIELD_FIELD,
        reason: format!("expected a number, got {}", value),
    })?;

    Ok(YieldEstimate { tons_per_hectare })
}

/// Floor a forecast value at zero
pub fn clamp_forecast_value(value: f64) -> f64 {
    value.max(0.0)
}

/// Turn a `/forecast` response body into a day-labelled series.
///
/// A missing or null `forecast` field yields an empty series. Negative
/// values are clamped to zero.
pub fn project_forecast(
    body: &Value,
    start_date: Option<NaiveDate>,
) -> Result<ForecastSeries, PresentationError> {
    let raw = match body.get(FORECAST_FIELD) {
        None | Some(Value::Null) => {
            return Ok(ForecastSeries {
                start_date,
                points: Vec::new(),
            })
        }
        Some(Value::Array(values)) => values,
        Some(other) => {
            return Err(PresentationError::Malformed {
                field: FORECAST_FIELD,
                reason: format!("expected an array, got {}", other),
            })
        }
    };

    let points = raw
        .iter()
        .enumerate()
        .map(|(i, v)| {
            v.as_f64()
                .map(|n| ForecastPoint::new(i, clamp_forecast_value(n)))
                .ok_or_else(|| PresentationError::Malformed {
                    field: FORECAST_FIELD,
                    reason: format!("entry {} is not a number: {}", i + 1, v),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ForecastSeries { start_date, points })
}

/// Project already-decoded forecast values
pub fn project_forecast_values(values: &[f64], start_date: Option<NaiveDate>) -> ForecastSeries {
    ForecastSeries {
        start_date,
        points: values
            .iter()
            .enumerate()
            .map(|(i, v)| ForecastPoint::new(i, clamp_forecast_value(*v)))
            .collect(),
    }
}
