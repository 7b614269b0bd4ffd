//! Application wiring: one dashboard, three pages

use std::sync::Arc;

use chrono::NaiveDate;
use shared::{ForecastMode, HealthStatus, ModelMetadata};

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::external::{ForecastClient, PredictionClient};
use crate::services::{CategoryCatalog, ForecastForm, PredictForm};

/// Shared clients and catalog behind every page of the dashboard
pub struct Dashboard {
    config: Arc<Config>,
    prediction: PredictionClient,
    forecast: ForecastClient,
    catalog: Arc<CategoryCatalog>,
}

impl Dashboard {
    pub fn new(config: Config) -> Self {
        let http = reqwest::Client::new();
        let prediction = PredictionClient::with_client(http.clone(), &config.prediction.base_url);
        let forecast = ForecastClient::with_client(http, &config.forecast.base_url);
        let catalog = Arc::new(CategoryCatalog::new(prediction.clone()));

        tracing::info!(
            environment = %config.environment,
            prediction = %config.prediction.base_url,
            forecast = %config.forecast.base_url,
            "Dashboard configured"
        );

        Self {
            config: Arc::new(config),
            prediction,
            forecast,
            catalog,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> Arc<CategoryCatalog> {
        Arc::clone(&self.catalog)
    }

    /// A new yield predictor form. Call [`PredictForm::mount`] before use.
    pub fn predict_form(&self) -> PredictForm {
        PredictForm::new(self.prediction.clone(), self.catalog())
    }

    /// A new forecast form, dated from today
    pub fn forecast_form(&self, mode: ForecastMode) -> ForecastForm {
        self.forecast_form_on(mode, chrono::Local::now().date_naive())
    }

    pub fn forecast_form_on(&self, mode: ForecastMode, today: NaiveDate) -> ForecastForm {
        ForecastForm::new(self.forecast.clone(), mode, today)
    }

    pub async fn service_health(&self) -> ClientResult<HealthStatus> {
        self.prediction.health().await
    }

    pub async fn model_metadata(&self) -> ClientResult<ModelMetadata> {
        self.prediction.metadata().await
    }
}

/// Load `.env` and configuration, then build the dashboard
pub fn bootstrap() -> anyhow::Result<Dashboard> {
    dotenvy::dotenv().ok();
    let config = Config::load().map_err(ClientError::from)?;
    Ok(Dashboard::new(config))
}
