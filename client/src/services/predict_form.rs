//! Yield predictor page: single-point prediction form

use std::sync::Arc;

use shared::{
    build_prediction_request, CategoryField, FormError, FormState, YieldEstimate,
};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use uuid::Uuid;

use super::catalog::{CategoryCatalog, CATALOG_UNAVAILABLE};
use super::orchestrator::{RequestLifecycle, RequestOrchestrator, SubmitOutcome};
use crate::external::PredictionClient;

/// State and actions of one prediction form instance
pub struct PredictForm {
    id: Uuid,
    state: FormState,
    catalog: Arc<CategoryCatalog>,
    client: PredictionClient,
    orchestrator: RequestOrchestrator<YieldEstimate>,
    banner: Option<String>,
    mounted: bool,
}

impl PredictForm {
    pub fn new(client: PredictionClient, catalog: Arc<CategoryCatalog>) -> Self {
        let id = Uuid::new_v4();
        Self {
            id,
            state: FormState::prediction(),
            catalog,
            client,
            orchestrator: RequestOrchestrator::new(id),
            banner: None,
            mounted: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Load the category catalog and fill categorical defaults.
    ///
    /// Runs once per form. A catalog failure only raises the banner; the
    /// numeric and boolean fields stay usable and categorical fields accept
    /// free input.
    pub async fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        match self.catalog.load().await {
            Ok(options) => {
                self.state.apply_category_defaults(options);
                tracing::debug!(form_id = %self.id, "Applied category defaults");
            }
            Err(e) => {
                tracing::warn!(form_id = %self.id, error = %e, "Categories unavailable");
                self.banner = Some(CATALOG_UNAVAILABLE.to_string());
            }
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Options to list for a categorical field; empty without a catalog
    pub fn options(&self, field: CategoryField) -> &[String] {
        self.catalog.options(field)
    }

    /// Informational banner, e.g. when categories failed to load
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Store a raw input value. Categorical values must come from the
    /// catalog once it is loaded.
    pub fn update(&mut self, name: &str, raw: &str) -> Result<(), FormError> {
        match CategoryField::from_field_name(name) {
            Some(field) => self.state.select_category(field, raw, self.catalog.get()),
            None => self.state.update(name, raw),
        }
    }

    /// Restore defaults and clear result, error and banner. Categorical
    /// fields go back to the first catalog option when one is loaded.
    pub fn reset(&mut self) {
        self.state.reset();
        if let Some(options) = self.catalog.get() {
            self.state.apply_category_defaults(options);
        }
        self.orchestrator.reset();
        self.banner = None;
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.orchestrator.is_submitting()
    }

    pub fn lifecycle(&self) -> RequestLifecycle<YieldEstimate> {
        self.orchestrator.lifecycle()
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestLifecycle<YieldEstimate>> {
        self.orchestrator.subscribe()
    }

    /// Result line, e.g. `4.2100 tons / ha`
    pub fn result_text(&self) -> Option<String> {
        self.lifecycle().result().map(ToString::to_string)
    }

    /// Inline error text, if the last submission failed
    pub fn error_text(&self) -> Option<String> {
        self.lifecycle().error().map(|e| e.user_message())
    }

    /// Validate, send, and wait for the prediction
    pub async fn submit(&self) -> SubmitOutcome {
        if self.orchestrator.is_submitting() {
            return SubmitOutcome::Ignored;
        }
        let request = match build_prediction_request(&self.state) {
            Ok(request) => request,
            Err(e) => return self.orchestrator.reject(e.into()),
        };

        let client = self.client.clone();
        self.orchestrator
            .run(async move { client.predict(&request).await })
            .await
    }

    /// Validate and start the prediction in the background.
    ///
    /// Returns `None` when nothing was sent: a request is already in flight
    /// or validation failed (see [`Self::lifecycle`]).
    pub fn submit_detached(&self) -> Option<JoinHandle<SubmitOutcome>> {
        if self.orchestrator.is_submitting() {
            return None;
        }
        let request = match build_prediction_request(&self.state) {
            Ok(request) => request,
            Err(e) => {
                self.orchestrator.reject(e.into());
                return None;
            }
        };

        let client = self.client.clone();
        self.orchestrator
            .spawn(async move { client.predict(&request).await })
    }
}
