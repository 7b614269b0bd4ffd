//! Request payload builders
//!
//! Pure transformations from [`FormState`] into the request bodies of the
//! prediction and forecast services.

use thiserror::Error;

use crate::form::{fields, FormState};
use crate::models::{
    ForecastRequest, PredictionRequest, DEFAULT_HORIZON, FORM_FALLBACK_YIELD,
    GRAPH_FALLBACK_YIELD,
};
use crate::types::ForecastMode;
use crate::validation::{parse_horizon, parse_numeric, parse_numeric_list};

/// Local, pre-submission validation failure
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required field is empty: {field}")]
    MissingRequired { field: &'static str },

    #[error("non-numeric field: {field}")]
    NonNumeric { field: &'static str },

    #[error("non-numeric value in {field}")]
    NonNumericList { field: &'static str },

    #[error("invalid horizon: {reason}")]
    InvalidHorizon { reason: &'static str },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingRequired { field }
            | ValidationError::NonNumeric { field }
            | ValidationError::NonNumericList { field } => field,
            ValidationError::InvalidHorizon { .. } => fields::HORIZON,
        }
    }

    /// Message shown next to the submit control
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::MissingRequired { .. } | ValidationError::NonNumeric { .. } => {
                "Please fill numeric fields with valid numbers".to_string()
            }
            ValidationError::NonNumericList { field } => {
                format!("{} must be a comma-separated list of numbers", field)
            }
            ValidationError::InvalidHorizon { reason } => reason.to_string(),
        }
    }
}

/// Fail on the first required field that is still empty
pub fn check_required(form: &FormState) -> Result<(), ValidationError> {
    match form.missing_required().first() {
        Some(&field) => Err(ValidationError::MissingRequired { field }),
        None => Ok(()),
    }
}

fn numeric(form: &FormState, field: &'static str) -> Result<f64, ValidationError> {
    parse_numeric(form.text(field)).ok_or(ValidationError::NonNumeric { field })
}

/// Build the body of `POST /predict`.
///
/// Categorical values are passed through verbatim; they are checked against
/// the catalog when selected, not here.
pub fn build_prediction_request(form: &FormState) -> Result<PredictionRequest, ValidationError> {
    check_required(form)?;
    Ok(PredictionRequest {
        rainfall_mm: numeric(form, fields::RAINFALL_MM)?,
        temperature_celsius: numeric(form, fields::TEMPERATURE_CELSIUS)?,
        days_to_harvest: numeric(form, fields::DAYS_TO_HARVEST)?,
        fertilizer_used: form.flag(fields::FERTILIZER_USED),
        irrigation_used: form.flag(fields::IRRIGATION_USED),
        region: form.text(fields::REGION).to_string(),
        soil_type: form.text(fields::SOIL_TYPE).to_string(),
        crop: form.text(fields::CROP).to_string(),
        weather_condition: form.text(fields::WEATHER_CONDITION).to_string(),
    })
}

/// Historical yield substituted when `recent_yield` is left empty
pub fn fallback_recent_yield(mode: ForecastMode) -> &'static [f64] {
    match mode {
        ForecastMode::Graph => &GRAPH_FALLBACK_YIELD,
        ForecastMode::Broadcast => &FORM_FALLBACK_YIELD,
    }
}

/// Parse the `recent_yield` field, or fall back to the entry point's fixed
/// history when it is empty.
pub fn recent_yield(form: &FormState, mode: ForecastMode) -> Result<Vec<f64>, ValidationError> {
    let raw = form.text(fields::RECENT_YIELD);
    let parsed = parse_numeric_list(raw).map_err(|_| ValidationError::NonNumericList {
        field: fields::RECENT_YIELD,
    })?;
    if parsed.is_empty() {
        return Ok(fallback_recent_yield(mode).to_vec());
    }
    Ok(parsed)
}

fn forecast_horizon(form: &FormState, mode: ForecastMode) -> Result<u32, ValidationError> {
    match (mode, form.spec(fields::HORIZON)) {
        (ForecastMode::Broadcast, Some(_)) => parse_horizon(form.text(fields::HORIZON))
            .map_err(|reason| ValidationError::InvalidHorizon { reason }),
        _ => Ok(DEFAULT_HORIZON),
    }
}

/// Build the body of `POST /forecast`.
///
/// In [`ForecastMode::Graph`] each driver is sent as a one-element sequence
/// for the service to repeat. In [`ForecastMode::Broadcast`] each driver is
/// replicated across the horizon before sending.
pub fn build_forecast_request(
    form: &FormState,
    mode: ForecastMode,
) -> Result<ForecastRequest, ValidationError> {
    check_required(form)?;
    let horizon = forecast_horizon(form, mode)?;
    let shape = |field: &'static str| -> Result<Vec<f64>, ValidationError> {
        let value = numeric(form, field)?;
        Ok(match mode {
            ForecastMode::Graph => vec![value],
            ForecastMode::Broadcast => vec![value; horizon as usize],
        })
    };

    Ok(ForecastRequest {
        horizon,
        temperature: shape(fields::TEMPERATURE)?,
        humidity: shape(fields::HUMIDITY)?,
        nitrogen: shape(fields::NITROGEN)?,
        phosphorus: shape(fields::PHOSPHORUS)?,
        potassium: shape(fields::POTASSIUM)?,
        recent_yield: recent_yield(form, mode)?,
    })
}
