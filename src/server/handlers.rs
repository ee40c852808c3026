use super::page::render_html;
use super::types::{FormSubmission, HealthResponse, SubmitRequest};
use crate::{
    config::Locale,
    form::{FormController, FormEvent, render},
    prediction::Outcome,
};
use axum::{
    Form,
    extract::State,
    response::{Html, Json},
};
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<FormController>,
    pub locale: Locale,
}

impl AppState {
    fn page(&self, event: &FormEvent, outcome: &Outcome) -> Html<String> {
        Html(render_html(&render(event, outcome, self.locale)))
    }
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let event = FormEvent::default();
    let outcome = state.controller.handle(&event).await;
    state.page(&event, &outcome)
}

/// Every outcome, errors included, is a page the user should see, so this
/// always answers 200.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(submission): Form<FormSubmission>,
) -> Html<String> {
    debug!("Received form submission");

    let event = FormEvent::submit(submission.into_text());
    let outcome = state.controller.handle(&event).await;
    state.page(&event, &outcome)
}

pub async fn submit_api(
    State(state): State<AppState>,
    Json(request): Json<SubmitRequest>,
) -> Json<Outcome> {
    debug!("Received API submission");

    let event = FormEvent::submit(request.text);
    Json(state.controller.handle(&event).await)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
