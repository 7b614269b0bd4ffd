//! HTTP clients for the prediction and forecast services

pub mod forecast;
pub mod prediction;

pub use forecast::ForecastClient;
pub use prediction::PredictionClient;

use reqwest::Response;
use serde_json::Value;
use shared::ServiceErrorBody;

use crate::error::{ClientError, ClientResult};

/// Join a configured base URL and an endpoint path
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Read a JSON body, turning error responses into [`ClientError::Service`].
///
/// The message is taken from the structured error body when there is one,
/// otherwise from the HTTP status. A success response whose body carries an
/// `error` string is an error too. Transport failures with no message fall
/// back to [`crate::error::GENERIC_FAILURE`] when shown.
pub(crate) async fn read_json(response: Response) -> ClientResult<Value> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ClientError::Network(format!("Failed to read response: {}", e)))?;
    let body: Option<Value> = serde_json::from_str(&text).ok();

    let structured = body
        .as_ref()
        .and_then(|b| serde_json::from_value::<ServiceErrorBody>(b.clone()).ok())
        .and_then(|b| b.message());

    if !status.is_success() {
        let message = structured
            .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));
        tracing::warn!(status = status.as_u16(), %message, "Service returned an error");
        return Err(ClientError::Service {
            status: Some(status.as_u16()),
            message,
        });
    }

    let body = body.ok_or_else(|| ClientError::Service {
        status: Some(status.as_u16()),
        message: "Service returned a non-JSON response".to_string(),
    })?;

    if let Some(error) = body.get("error").and_then(Value::as_str) {
        if !error.trim().is_empty() {
            tracing::warn!(status = status.as_u16(), %error, "Service reported an error");
            return Err(ClientError::Service {
                status: Some(status.as_u16()),
                message: error.to_string(),
            });
        }
    }

    Ok(body)
}
