//! Client for the single-point crop yield prediction service

use reqwest::Client;
use shared::{
    project_prediction, CategoryOptions, HealthStatus, ModelMetadata, PredictionRequest,
    PresentationError, YieldEstimate,
};

use super::{endpoint, read_json};
use crate::error::{ClientError, ClientResult};

/// Prediction service client
#[derive(Clone)]
pub struct PredictionClient {
    client: Client,
    base_url: String,
}

impl PredictionClient {
    /// Create a new PredictionClient
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

    /// Fetch the allowed values of every categorical field
    pub async fn categories(&self) -> ClientResult<CategoryOptions> {
        let response = self
            .client
            .get(endpoint(&self.base_url, "categories"))
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("Categories request failed: {}", e)))?;

        let body = read_json(response).await?;
        serde_json::from_value(body).map_err(|e| {
            ClientError::Presentation(PresentationError::Malformed {
                field: "categories",
                reason: e.to_string(),
            })
        })
    }

    /// Request a single-point yield prediction
    pub async fn predict(&self, request: &PredictionRequest) -> ClientResult<YieldEstimate> {
        tracing::debug!(?request, "Posting prediction request");

        let response = self
            .client
            .post(endpoint(&self.base_url, "predict"))
            .json(request)
            .send()
            .await?;

        let body = read_json(response).await?;
        Ok(project_prediction(&body)?)
    }

    /// Check whether the service is up and its model is loaded
    pub async fn health(&self) -> ClientResult<HealthStatus> {
        let response = self
            .client
            .get(endpoint(&self.base_url, "health"))
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("Health request failed: {}", e)))?;

        let body = read_json(response).await?;
        serde_json::from_value(body).map_err(|e| {
            ClientError::Presentation(PresentationError::Malformed {
                field: "health",
                reason: e.to_string(),
            })
        })
    }

    /// Fetch the model's input and transformed feature names
    pub async fn metadata(&self) -> ClientResult<ModelMetadata> {
        let response = self
            .client
            .get(endpoint(&self.base_url, "metadata"))
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("Metadata request failed: {}", e)))?;

        let body = read_json(response).await?;
        serde_json::from_value(body).map_err(|e| {
            ClientError::Presentation(PresentationError::Malformed {
                field: "metadata",
                reason: e.to_string(),
            })
        })
    }
}
