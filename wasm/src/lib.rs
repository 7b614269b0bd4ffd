//! WebAssembly module for the Smart Crop dashboard
//!
//! Provides client-side computation for:
//! - Prediction and forecast payload building
//! - Forecast projection for charts and lists
//! - Offline input validation

use std::str::FromStr;

use chrono::NaiveDate;
use serde_json::Value;
use shared::{FieldKind, FormState};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {}

/// Build the `POST /predict` body from a JSON object of field values
#[wasm_bindgen]
pub fn build_prediction_payload(form_json: &str) -> Result<String, JsValue> {
    prediction_payload(form_json).map_err(|e| JsValue::from_str(&e))
}

/// Build the `POST /forecast` body. `mode` is `graph` or `broadcast`.
#[wasm_bindgen]
pub fn build_forecast_payload(form_json: &str, mode: &str) -> Result<String, JsValue> {
    forecast_payload(form_json, mode).map_err(|e| JsValue::from_str(&e))
}

/// Turn a `/forecast` response into chart rows `[{day, yield}]`
#[wasm_bindgen]
pub fn project_forecast(response_json: &str) -> Result<String, JsValue> {
    forecast_rows(response_json).map_err(|e| JsValue::from_str(&e))
}

/// Format a predicted yield, e.g. `4.2100 tons / ha`
#[wasm_bindgen]
pub fn format_prediction(value: f64) -> String {
    YieldEstimate {
        tons_per_hectare: value,
    }
    .to_string()
}

/// Parse a comma-delimited yield history into a JSON array
#[wasm_bindgen]
pub fn parse_recent_yield(raw: &str) -> Result<String, JsValue> {
    recent_yield_json(raw).map_err(JsValue::from_str)
}

/// Check a `YYYY-MM-DD` forecast start date
#[wasm_bindgen]
pub fn is_valid_forecast_start_date(iso: &str) -> bool {
    shared::parse_iso_date(iso)
        .and_then(shared::validate_forecast_start_date)
        .is_ok()
}

fn fill_form(form: &mut FormState, form_json: &str) -> Result<(), String> {
    let values: serde_json::Map<String, Value> =
        serde_json::from_str(form_json).map_err(|e| format!("Invalid form JSON: {}", e))?;

    for (name, value) in &values {
        let Some(spec) = form.spec(name) else {
            continue;
        };
        let result = match (spec.kind, value) {
            (FieldKind::Boolean, Value::Bool(flag)) => form.set_flag(name, *flag),
            (_, Value::String(raw)) => form.update(name, raw),
            (_, Value::Number(n)) => form.update(name, &n.to_string()),
            (_, Value::Null) => continue,
            (_, other) => return Err(format!("Unsupported value for {}: {}", name, other)),
        };
        result.map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn prediction_payload(form_json: &str) -> Result<String, String> {
    let mut form = FormState::prediction();
    fill_form(&mut form, form_json)?;
    let request = shared::build_prediction_request(&form).map_err(|e| e.user_message())?;
    serde_json::to_string(&request).map_err(|e| e.to_string())
}

fn forecast_payload(form_json: &str, mode: &str) -> Result<String, String> {
    let mode = ForecastMode::from_str(mode)?;
    // Start date is not part of the payload
    let anchor = NaiveDate::from_ymd_opt(shared::FORECAST_YEAR, 1, 1).unwrap_or(NaiveDate::MIN);
    let mut form = FormState::forecast(mode, anchor);
    fill_form(&mut form, form_json)?;
    let request = shared::build_forecast_request(&form, mode).map_err(|e| e.user_message())?;
    serde_json::to_string(&request).map_err(|e| e.to_string())
}

fn forecast_rows(response_json: &str) -> Result<String, String> {
    let body: Value =
        serde_json::from_str(response_json).map_err(|e| format!("Invalid response JSON: {}", e))?;
    let series = shared::project_forecast(&body, None).map_err(|e| e.to_string())?;
    serde_json::to_string(&series.points).map_err(|e| e.to_string())
}

fn recent_yield_json(raw: &str) -> Result<String, &'static str> {
    let values = shared::parse_numeric_list(raw)?;
    serde_json::to_string(&values).map_err(|_| "Failed to encode list")
}
