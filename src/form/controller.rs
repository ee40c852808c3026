use crate::prediction::{Outcome, PredictionClient};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Snapshot of the form at the moment of one user action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormEvent {
    pub text: String,
    pub submitted: bool,
}

impl FormEvent {
    pub fn idle(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            submitted: false,
        }
    }

    pub fn submit(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            submitted: true,
        }
    }
}

pub struct FormController {
    client: Arc<dyn PredictionClient>,
}

impl FormController {
    pub fn new(client: Arc<dyn PredictionClient>) -> Self {
        Self { client }
    }

    /// Runs one submission cycle to completion.
    ///
    /// The client is called only when the form was submitted and the text is
    /// not blank, and it receives the text exactly as typed.
    pub async fn handle(&self, event: &FormEvent) -> Outcome {
        if !event.submitted {
            return Outcome::NotSubmitted;
        }

        if event.text.trim().is_empty() {
            info!("Submission rejected: empty input");
            return Outcome::EmptyInput;
        }

        let submission_id = Uuid::new_v4();
        info!(
            %submission_id,
            text_len = event.text.len(),
            "Submitting text for prediction"
        );

        let outcome = self.client.submit(&event.text).await;

        match &outcome {
            Outcome::Success(_) => info!(%submission_id, outcome = outcome.kind(), "Prediction received"),
            _ => warn!(%submission_id, outcome = outcome.kind(), "Prediction failed"),
        }

        outcome
    }
}
