//! Client for the time-series yield forecast service

use chrono::NaiveDate;
use reqwest::Client;
use shared::{project_forecast, ForecastRequest, ForecastSeries};

use super::{endpoint, read_json};
use crate::error::ClientResult;

/// Forecast service client
#[derive(Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl ForecastClient {
    /// Create a new ForecastClient
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client sharing an existing connection pool
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request a multi-day forecast and project it for display
    pub async fn forecast(
        &self,
        request: &ForecastRequest,
        start_date: Option<NaiveDate>,
    ) -> ClientResult<ForecastSeries> {
        tracing::debug!(horizon = request.horizon, "Posting forecast request");

        let response = self
            .client
            .post(endpoint(&self.base_url, "forecast"))
            .json(request)
            .send()
            .await?;

        let body = read_json(response).await?;
        Ok(project_forecast(&body, start_date)?)
    }
}
