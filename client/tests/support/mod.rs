//! In-process stand-in for the prediction and forecast services
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::Notify;

/// Canned responses and a log of received requests
pub struct StubState {
    /// `None` answers `/categories` with a 500
    pub categories: Option<Value>,
    pub predict: (StatusCode, Value),
    pub forecast: (StatusCode, Value),
    /// When set, `/predict` waits for a notification before answering
    pub predict_gate: Option<Arc<Notify>>,
    pub received: Mutex<Vec<(String, Value)>>,
}

impl Default for StubState {
    fn default() -> Self {
        Self {
            categories: Some(json!({
                "Region": ["North"],
                "Soil_Type": ["Loam"],
                "Crop": ["Wheat"],
                "Weather_Condition": ["Sunny"],
            })),
            predict: (
                StatusCode::OK,
                json!({"predicted_yield_tons_per_hectare": 4.21}),
            ),
            forecast: (
                StatusCode::OK,
                json!({"forecast_days": 7, "forecast": [3.1, 3.2, 3.3, 3.4, 3.5, 3.6, 3.7]}),
            ),
            predict_gate: None,
            received: Mutex::new(Vec::new()),
        }
    }
}

impl StubState {
    fn record(&self, path: &str, body: Value) {
        self.received
            .lock()
            .unwrap()
            .push((path.to_string(), body));
    }
}

pub struct Stub {
    pub base_url: String,
    pub state: Arc<StubState>,
}

impl Stub {
    /// Bodies received on a path, in arrival order
    pub fn requests(&self, path: &str) -> Vec<Value> {
        self.state
            .received
            .lock()
            .unwrap()
            .iter()
            .filter(|(p, _)| p == path)
            .map(|(_, body)| body.clone())
            .collect()
    }

    pub fn count(&self, path: &str) -> usize {
        self.requests(path).len()
    }
}

async fn categories(State(state): State<Arc<StubState>>) -> (StatusCode, Json<Value>) {
    state.record("/categories", Value::Null);
    match &state.categories {
        Some(body) => (StatusCode::OK, Json(body.clone())),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"detail": "categories unavailable"})),
        ),
    }
}

async fn predict(
    State(state): State<Arc<StubState>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.record("/predict", body);
    if let Some(gate) = &state.predict_gate {
        gate.notified().await;
    }
    let (status, body) = state.predict.clone();
    (status, Json(body))
}

async fn forecast(
    State(state): State<Arc<StubState>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.record("/forecast", body);
    let (status, body) = state.forecast.clone();
    (status, Json(body))
}

async fn health() -> Json<Value> {
    Json(json!({"status": "ok", "model_loaded": true}))
}

async fn metadata() -> Json<Value> {
    Json(json!({
        "input_columns": ["Rainfall_mm", "Temperature_Celsius"],
        "transformed_feature_names": ["num__Rainfall_mm", "num__Temperature_Celsius"],
    }))
}

/// Start the stub on an ephemeral local port
pub async fn spawn(state: StubState) -> Stub {
    let state = Arc::new(state);
    let app = Router::new()
        .route("/categories", get(categories))
        .route("/predict", post(predict))
        .route("/forecast", post(forecast))
        .route("/health", get(health))
        .route("/metadata", get(metadata))
        .with_state(Arc::clone(&state));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Stub {
        base_url: format!("http://{}", addr),
        state,
    }
}

/// A base URL nothing is listening on
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
