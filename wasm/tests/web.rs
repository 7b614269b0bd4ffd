#![cfg(target_arch = "wasm32")]

use crop_yield_wasm::{
    build_forecast_payload, build_prediction_payload, is_valid_forecast_start_date,
    parse_recent_yield, project_forecast,
};
use wasm_bindgen_test::wasm_bindgen_test;

#[wasm_bindgen_test]
fn prediction_payload_error_crosses_boundary() {
    let err = build_prediction_payload(r#"{"Rainfall_mm": "lots"}"#).unwrap_err();
    assert_eq!(
        err.as_string().as_deref(),
        Some("Please fill numeric fields with valid numbers")
    );
}

#[wasm_bindgen_test]
fn forecast_payload_and_rows() {
    let form = r#"{"temperature": 26, "humidity": 70, "N": 90, "P": 40, "K": 45}"#;
    let payload = build_forecast_payload(form, "broadcast").unwrap();
    assert!(payload.contains(r#""horizon":7"#));

    let rows = project_forecast(r#"{"forecast": [1.5]}"#).unwrap();
    assert_eq!(rows, r#"[{"day":"Day 1","yield":1.5}]"#);
}

#[wasm_bindgen_test]
fn input_helpers() {
    assert_eq!(parse_recent_yield("1, 2").unwrap(), "[1.0,2.0]");
    assert!(parse_recent_yield("1, two").is_err());
    assert!(is_valid_forecast_start_date("2026-07-04"));
}
