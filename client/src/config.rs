//! Configuration management for the Smart Crop dashboard client
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with CROP_ prefix
//!
//! Loading happens once at application start; the resulting [`Config`] is
//! passed to the [`crate::Dashboard`] explicitly.

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use validator::Validate;

/// Prediction service address used when nothing else is configured
pub const DEFAULT_PREDICTION_BASE_URL: &str = "http://localhost:8000";

/// Selects the `config/{env}` file and sets [`Config::environment`]
pub const ENVIRONMENT_VAR: &str = "CROP__ENVIRONMENT";

/// Forecast service address used when nothing else is configured
pub const DEFAULT_FORECAST_BASE_URL: &str = "http://127.0.0.1:8001";

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Validate)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Single-point prediction service
    #[validate]
    pub prediction: PredictionServiceConfig,

    /// Time-series forecast service
    #[validate]
    pub forecast: ForecastServiceConfig,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct PredictionServiceConfig {
    /// Base URL serving `/categories`, `/predict`, `/health`, `/metadata`
    #[validate(url)]
    pub base_url: String,
}

// The forecast service runs on its own port; it is configured separately
// from the prediction service.
#[derive(Debug, Deserialize, Clone, Validate)]
pub struct ForecastServiceConfig {
    /// Base URL serving `/forecast`
    #[validate(url)]
    pub base_url: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("prediction.base_url", DEFAULT_PREDICTION_BASE_URL)?
            .set_default("forecast.base_url", DEFAULT_FORECAST_BASE_URL)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (CROP_ prefix)
            .add_source(
                Environment::with_prefix("CROP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config
            .validate()
            .map_err(|e| ConfigError::Message(e.to_string()))?;
        Ok(config)
    }

    /// Configuration pointing both services at explicit base URLs
    pub fn with_base_urls(prediction: impl Into<String>, forecast: impl Into<String>) -> Self {
        Self {
            environment: "development".to_string(),
            prediction: PredictionServiceConfig {
                base_url: prediction.into(),
            },
            forecast: ForecastServiceConfig {
                base_url: forecast.into(),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_base_urls(DEFAULT_PREDICTION_BASE_URL, DEFAULT_FORECAST_BASE_URL)
    }
}
