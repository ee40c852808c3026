use async_trait::async_trait;
use sentiment_form::prediction::{Outcome, PredictionClient};
use std::sync::{Arc, Mutex};

/// Mock prediction client that answers with a fixed outcome and records
/// every text it was asked to submit.
#[derive(Debug)]
pub struct MockPredictionClient {
    pub outcome: Outcome,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl MockPredictionClient {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl PredictionClient for MockPredictionClient {
    async fn submit(&self, text: &str) -> Outcome {
        self.requests.lock().unwrap().push(text.to_string());
        self.outcome.clone()
    }
}
