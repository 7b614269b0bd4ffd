//! Auxiliary payloads of the prediction and forecast services

use serde::{Deserialize, Serialize};

/// `GET /health` on the prediction service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
}

impl HealthStatus {
    pub fn is_ready(&self) -> bool {
        self.status == "ok" && self.model_loaded
    }
}

/// `GET /metadata` on the prediction service
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelMetadata {
    #[serde(default)]
    pub input_columns: Vec<String>,
    #[serde(default)]
    pub transformed_feature_names: Vec<String>,
}

/// Structured error body. FastAPI reports `detail`, the forecast service
/// reports `error`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ServiceErrorBody {
    /// Message from the body, preferring `detail` over `error`
    pub fn message(&self) -> Option<String> {
        let detail = self.detail.as_ref().and_then(|d| match d {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.trim().is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        });
        detail.or_else(|| self.error.clone().filter(|e| !e.trim().is_empty()))
    }
}
