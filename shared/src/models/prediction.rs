//! Single-point yield prediction models

use serde::{Deserialize, Serialize};

/// Response field carrying the predicted yield
pub const PREDICTED_YIELD_FIELD: &str = "predicted_yield_tons_per_hectare";

/// Body of `POST /predict`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionRequest {
    #[serde(rename = "Rainfall_mm")]
    pub rainfall_mm: f64,
    #[serde(rename = "Temperature_Celsius")]
    pub temperature_celsius: f64,
    #[serde(rename = "Days_to_Harvest")]
    pub days_to_harvest: f64,
    #[serde(rename = "Fertilizer_Used")]
    pub fertilizer_used: bool,
    #[serde(rename = "Irrigation_Used")]
    pub irrigation_used: bool,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Soil_Type")]
    pub soil_type: String,
    #[serde(rename = "Crop")]
    pub crop: String,
    #[serde(rename = "Weather_Condition")]
    pub weather_condition: String,
}

/// A projected single-point prediction, in tons per hectare
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct YieldEstimate {
    pub tons_per_hectare: f64,
}

impl std::fmt::Display for YieldEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4} tons / ha", self.tons_per_hectare)
    }
}
