//! Contact page and lead submission.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Form, Router};
use bullion_core::form::{FormState, LeadFormController};
use bullion_core::lifecycle::Mount;
use bullion_core::model::{LeadForm, SubmissionStatus};
use tracing::{debug, info};

use crate::render::{pages, shell};
use crate::state::AppState;

/// Shown when the browser let a submission through without the required fields.
pub const MISSING_FIELDS_MESSAGE: &str = "Please provide your full name and email.";

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/contact", get(show).post(submit))
}

fn render(state: &FormState) -> Html<String> {
    Html(shell::page("Contact Us", "/contact", &pages::contact(state)))
}

async fn show() -> Html<String> {
    render(&FormState::default())
}

async fn submit(State(state): State<Arc<AppState>>, Form(lead): Form<LeadForm>) -> Html<String> {
    let missing = lead.missing_required();
    if !missing.is_empty() {
        debug!(?missing, "lead refused before submission");
        return render(&FormState {
            draft: lead,
            status: SubmissionStatus::Error(MISSING_FIELDS_MESSAGE.to_owned()),
            loading: false,
        });
    }

    let mount = Mount::new();
    let controller = LeadFormController::with_draft(Arc::clone(&state.api), mount.scope(), lead);
    let outcome = controller.submit().await;
    info!(?outcome, "lead form submitted");
    render(&controller.state())
}
