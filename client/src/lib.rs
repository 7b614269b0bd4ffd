//! Smart Crop dashboard client
//!
//! Collects agronomic inputs, sends them to the yield prediction and
//! forecast services, and turns the responses into display-ready results.
//! Rendering is left to the caller: pages expose their state and a
//! finished [`shared::ForecastSeries`] or [`shared::YieldEstimate`].

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod app;
pub mod config;
pub mod error;
pub mod external;
pub mod services;

pub use app::{bootstrap, Dashboard};
pub use config::Config;
pub use error::{ClientError, ClientResult, ErrorDetail, ErrorSurface};
pub use services::{
    CategoryCatalog, ForecastForm, PredictForm, RequestLifecycle, RequestOrchestrator,
    SubmitOutcome,
};

/// Install the tracing subscriber. Call once at application start.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crop_yield_client=debug,reqwest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
