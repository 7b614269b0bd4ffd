//! Forecast pages: the 7-day list and the forecast graph

use chrono::NaiveDate;
use shared::{
    build_forecast_request, fields, FieldSpec, FormError, FormState, ForecastMode,
    ForecastSeries,
};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use uuid::Uuid;

use super::orchestrator::{RequestLifecycle, RequestOrchestrator, SubmitOutcome};
use crate::error::ClientError;
use crate::external::ForecastClient;

/// State and actions of one forecast form instance
pub struct ForecastForm {
    id: Uuid,
    mode: ForecastMode,
    state: FormState,
    client: ForecastClient,
    orchestrator: RequestOrchestrator<ForecastSeries>,
}

impl ForecastForm {
    /// `today` seeds the list page's start date
    pub fn new(client: ForecastClient, mode: ForecastMode, today: NaiveDate) -> Self {
        let id = Uuid::new_v4();
        Self {
            id,
            mode,
            state: FormState::forecast(mode, today),
            client,
            orchestrator: RequestOrchestrator::new(id),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn mode(&self) -> ForecastMode {
        self.mode
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn fields(&self) -> &[FieldSpec] {
        self.state.specs()
    }

    pub fn update(&mut self, name: &str, raw: &str) -> Result<(), FormError> {
        self.state.update(name, raw)
    }

    pub fn set_start_date(&mut self, date: NaiveDate) -> Result<(), FormError> {
        self.state.set_date(fields::START_DATE, date)
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.state.date(fields::START_DATE)
    }

    pub fn reset(&mut self) {
        self.state.reset();
        self.orchestrator.reset();
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.orchestrator.is_submitting()
    }

    /// Label of the submit control
    pub fn submit_label(&self) -> &'static str {
        match (self.mode, self.orchestrator.is_submitting()) {
            (ForecastMode::Graph, false) => "Show Forecast Graph",
            (ForecastMode::Graph, true) => "Generating...",
            (ForecastMode::Broadcast, false) => "Get 7-Day Forecast",
            (ForecastMode::Broadcast, true) => "Predicting...",
        }
    }

    pub fn lifecycle(&self) -> RequestLifecycle<ForecastSeries> {
        self.orchestrator.lifecycle()
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestLifecycle<ForecastSeries>> {
        self.orchestrator.subscribe()
    }

    /// The series to hand to the chart or list, if the last submit succeeded
    pub fn series(&self) -> Option<ForecastSeries> {
        self.lifecycle().result().cloned()
    }

    /// Alert text for the last failure, worded per page
    pub fn alert_message(&self) -> Option<String> {
        let lifecycle = self.lifecycle();
        let error = lifecycle.error()?;
        let message = error.user_message();
        Some(match (self.mode, error) {
            (_, ClientError::Validation(_)) => message,
            (ForecastMode::Broadcast, ClientError::Service { .. }) => {
                format!("Server error: {}", message)
            }
            (ForecastMode::Broadcast, _) => format!("Request failed: {}", message),
            (ForecastMode::Graph, _) => format!("Error fetching forecast: {}", message),
        })
    }

    /// Validate, send, and wait for the forecast
    pub async fn submit(&self) -> SubmitOutcome {
        if self.orchestrator.is_submitting() {
            return SubmitOutcome::Ignored;
        }
        let request = match build_forecast_request(&self.state, self.mode) {
            Ok(request) => request,
            Err(e) => return self.orchestrator.reject(e.into()),
        };

        let client = self.client.clone();
        let start_date = self.start_date();
        self.orchestrator
            .run(async move { client.forecast(&request, start_date).await })
            .await
    }

    /// Validate and start the forecast in the background. Returns `None`
    /// when nothing was sent.
    pub fn submit_detached(&self) -> Option<JoinHandle<SubmitOutcome>> {
        if self.orchestrator.is_submitting() {
            return None;
        }
        let request = match build_forecast_request(&self.state, self.mode) {
            Ok(request) => request,
            Err(e) => {
                self.orchestrator.reject(e.into());
                return None;
            }
        };

        let client = self.client.clone();
        let start_date = self.start_date();
        self.orchestrator
            .spawn(async move { client.forecast(&request, start_date).await })
    }
}
