//! Page logic: catalog, request lifecycle, and the form controllers

pub mod catalog;
pub mod forecast_form;
pub mod orchestrator;
pub mod predict_form;

pub use catalog::CategoryCatalog;
pub use forecast_form::ForecastForm;
pub use orchestrator::{RequestLifecycle, RequestOrchestrator, SubmitOutcome};
pub use predict_form::PredictForm;
