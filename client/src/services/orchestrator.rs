//! Request lifecycle of a single form
//!
//! ```text
//! Idle ──submit──> Submitting ──ok──> Succeeded
//!                      │
//!                      └──error──> Failed
//! Succeeded | Failed ──submit──> Submitting
//! ```
//!
//! At most one request is in flight per form. A submit while `Submitting`
//! is ignored, and the previous result is cleared as soon as a new request
//! starts.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::error::{ClientError, ClientResult};

/// Lifecycle of the most recent submission
#[derive(Debug, Clone, PartialEq)]
pub enum RequestLifecycle<T> {
    Idle,
    Submitting,
    Succeeded(T),
    Failed(ClientError),
}

impl<T> RequestLifecycle<T> {
    pub fn is_submitting(&self) -> bool {
        matches!(self, RequestLifecycle::Submitting)
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            RequestLifecycle::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ClientError> {
        match self {
            RequestLifecycle::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RequestLifecycle::Idle => "idle",
            RequestLifecycle::Submitting => "submitting",
            RequestLifecycle::Succeeded(_) => "succeeded",
            RequestLifecycle::Failed(_) => "failed",
        }
    }
}

/// What became of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded,
    Failed,
    /// Local validation failed; nothing was sent
    Rejected,
    /// A request was already in flight; nothing was sent
    Ignored,
    /// The form was dropped before the response arrived
    Discarded,
}

type LifecycleCell<T> = watch::Sender<RequestLifecycle<T>>;

/// Drives one form's requests through [`RequestLifecycle`]
pub struct RequestOrchestrator<T> {
    form_id: Uuid,
    state: Arc<LifecycleCell<T>>,
}

impl<T> RequestOrchestrator<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(form_id: Uuid) -> Self {
        let (state, _) = watch::channel(RequestLifecycle::Idle);
        Self {
            form_id,
            state: Arc::new(state),
        }
    }

    pub fn form_id(&self) -> Uuid {
        self.form_id
    }

    /// Snapshot of the current lifecycle
    pub fn lifecycle(&self) -> RequestLifecycle<T> {
        self.state.borrow().clone()
    }

    /// Watch lifecycle changes, e.g. from a renderer
    pub fn subscribe(&self) -> watch::Receiver<RequestLifecycle<T>> {
        self.state.subscribe()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.borrow().is_submitting()
    }

    /// Record a local failure without touching the network
    pub fn reject(&self, error: ClientError) -> SubmitOutcome {
        let form_id = self.form_id;
        let applied = self.state.send_if_modified(|state| {
            if state.is_submitting() {
                return false;
            }
            tracing::info!(%form_id, error = %error, "Submission rejected");
            *state = RequestLifecycle::Failed(error);
            true
        });
        if applied {
            SubmitOutcome::Rejected
        } else {
            SubmitOutcome::Ignored
        }
    }

    /// Back to `Idle`, dropping any result or error. No effect while a
    /// request is in flight.
    pub fn reset(&self) -> bool {
        self.state.send_if_modified(|state| {
            if state.is_submitting() || matches!(state, RequestLifecycle::Idle) {
                return false;
            }
            *state = RequestLifecycle::Idle;
            true
        })
    }

    /// Run a request to completion, tracking it in the lifecycle
    pub async fn run<F>(&self, request: F) -> SubmitOutcome
    where
        F: Future<Output = ClientResult<T>>,
    {
        if !self.begin() {
            return SubmitOutcome::Ignored;
        }
        let result = request.await;
        finish(&self.state, self.form_id, result)
    }

    /// Start a request on the runtime and return immediately.
    ///
    /// The task only holds a weak reference to the lifecycle: if the form is
    /// dropped first, the request still completes but its result is thrown
    /// away. Returns `None` when a request is already in flight.
    pub fn spawn<F>(&self, request: F) -> Option<JoinHandle<SubmitOutcome>>
    where
        F: Future<Output = ClientResult<T>> + Send + 'static,
    {
        if !self.begin() {
            return None;
        }
        let state = Arc::downgrade(&self.state);
        let form_id = self.form_id;

        Some(tokio::spawn(async move {
            let result = request.await;
            match state.upgrade() {
                Some(state) => finish(&state, form_id, result),
                None => {
                    tracing::debug!(%form_id, "Form dropped, discarding response");
                    SubmitOutcome::Discarded
                }
            }
        }))
    }

    /// Idle | Succeeded | Failed -> Submitting
    fn begin(&self) -> bool {
        let form_id = self.form_id;
        let started = self.state.send_if_modified(|state| {
            if state.is_submitting() {
                return false;
            }
            *state = RequestLifecycle::Submitting;
            true
        });
        if started {
            tracing::info!(%form_id, "Submitting");
        } else {
            tracing::debug!(%form_id, "Request already in flight, ignoring submit");
        }
        started
    }
}

fn finish<T>(state: &LifecycleCell<T>, form_id: Uuid, result: ClientResult<T>) -> SubmitOutcome {
    match result {
        Ok(value) => {
            tracing::info!(%form_id, "Submission succeeded");
            state.send_replace(RequestLifecycle::Succeeded(value));
            SubmitOutcome::Succeeded
        }
        Err(error) => {
            tracing::warn!(%form_id, error = %error, "Submission failed");
            state.send_replace(RequestLifecycle::Failed(error));
            SubmitOutcome::Failed
        }
    }
}
