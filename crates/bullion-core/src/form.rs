//! Lead form controller.
//!
//! Owns the contact form draft and the outcome of the last submission. State
//! lives in a `watch` channel so a renderer can hold a receiver and redraw on
//! every change, and so each reader sees a whole [`FormState`] rather than a
//! half-applied update.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::api::BullionApi;
use crate::error::{ApiError, FailureKind};
use crate::lifecycle::Scope;
use crate::model::{LeadField, LeadForm, SubmissionStatus};

/// Shown when the backend answers with a non-2xx status.
pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Shown when the request never completed.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Everything the contact form renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub draft: LeadForm,
    pub status: SubmissionStatus,
    /// `true` only while a submission is in flight.
    pub loading: bool,
}

/// What a call to [`LeadFormController::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend accepted the lead; the draft was cleared.
    Accepted,
    /// The submission failed; the draft was kept for another try.
    Failed(FailureKind),
    /// A submission was already in flight, nothing was sent.
    AlreadyInFlight,
    /// The form was unmounted before the response arrived; nothing was applied.
    Discarded,
}

/// Controller for the lead capture form.
pub struct LeadFormController {
    api: Arc<dyn BullionApi>,
    scope: Scope,
    state: watch::Sender<FormState>,
}

impl std::fmt::Debug for LeadFormController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeadFormController")
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

impl LeadFormController {
    /// A controller with an empty draft, bound to the lifetime of `scope`.
    #[must_use]
    pub fn new(api: Arc<dyn BullionApi>, scope: Scope) -> Self {
        Self::with_draft(api, scope, LeadForm::default())
    }

    /// A controller whose draft starts as `draft`, e.g. values posted back by
    /// a browser.
    #[must_use]
    pub fn with_draft(api: Arc<dyn BullionApi>, scope: Scope, draft: LeadForm) -> Self {
        let (state, _) = watch::channel(FormState {
            draft,
            ..FormState::default()
        });
        Self { api, scope, state }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn draft(&self) -> LeadForm {
        self.state.borrow().draft.clone()
    }

    #[must_use]
    pub fn status(&self) -> SubmissionStatus {
        self.state.borrow().status.clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Receiver that is notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    /// Set one field of the draft. Allowed while a submission is in flight;
    /// the in-flight payload is a separate copy.
    pub fn set(&self, field: LeadField, value: impl Into<String>) {
        let value = value.into();
        self.state.send_if_modified(|s| {
            if s.draft.get(field) == value {
                return false;
            }
            s.draft.set(field, value);
            true
        });
    }

    /// Submit the current draft.
    ///
    /// Sends exactly one request unless a submission is already in flight,
    /// in which case this returns [`SubmitOutcome::AlreadyInFlight`] without
    /// touching the network. `loading` is cleared on every terminal outcome.
    pub async fn submit(&self) -> SubmitOutcome {
        let mut payload = None;
        self.state.send_if_modified(|s| {
            if s.loading {
                return false;
            }
            s.loading = true;
            s.status = SubmissionStatus::Idle;
            payload = Some(s.draft.clone());
            true
        });
        let Some(payload) = payload else {
            debug!("lead submission ignored, one is already in flight");
            return SubmitOutcome::AlreadyInFlight;
        };

        let Some(result) = self.scope.guard(self.api.submit_lead(&payload)).await else {
            debug!("lead form unmounted before response, discarding");
            self.state.send_modify(|s| s.loading = false);
            return SubmitOutcome::Discarded;
        };

        match result {
            Ok(receipt) => {
                info!(lead_id = ?receipt.id, "lead accepted");
                self.state.send_modify(|s| {
                    s.draft = LeadForm::default();
                    s.status = SubmissionStatus::Success(receipt.message);
                    s.loading = false;
                });
                SubmitOutcome::Accepted
            }
            Err(err) => {
                let kind = err.kind();
                log_failure(&err, kind);
                let message = match kind {
                    FailureKind::ServerRejected => SERVER_ERROR_MESSAGE,
                    FailureKind::TransportFailed => NETWORK_ERROR_MESSAGE,
                };
                self.state.send_modify(|s| {
                    s.status = SubmissionStatus::Error(message.to_owned());
                    s.loading = false;
                });
                SubmitOutcome::Failed(kind)
            }
        }
    }
}

fn log_failure(err: &ApiError, kind: FailureKind) {
    match kind {
        FailureKind::ServerRejected => warn!(error = %err, "lead rejected by backend"),
        FailureKind::TransportFailed => warn!(error = %err, "lead submission did not complete"),
    }
}
